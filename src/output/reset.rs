//! Output directory reset before a build.

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::{debug, log};

/// Delete the top-level files of `dir`, keeping subdirectories.
///
/// Deletions run in parallel and all finish before this returns. Failures,
/// including a missing `dir`, are logged and never returned: stale files may
/// remain but the build goes on. Returns the number of removed files.
pub fn reset_out_dir(dir: &Path) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("reset"; "skip `{}`: {}", dir.display(), e);
            return 0;
        }
    };

    let paths: Vec<_> = entries.flatten().map(|entry| entry.path()).collect();

    let removed = paths
        .par_iter()
        .filter(|path| {
            // lstat: a symlink to a directory is still a file entry here
            fs::symlink_metadata(path).is_ok_and(|m| !m.is_dir())
        })
        .filter(|path| match fs::remove_file(path) {
            Ok(()) => true,
            Err(e) => {
                log!("warning"; "failed to remove `{}`: {}", path.display(), e);
                false
            }
        })
        .count();

    debug!("reset"; "removed {} file(s) from `{}`", removed, dir.display());
    removed
}
