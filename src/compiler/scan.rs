//! Icon discovery (reads the filesystem, no other side effects).

use jwalk::WalkDir;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::CompileError;

/// A discovered icon and its current modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub path: PathBuf,
    pub mtime: SystemTime,
}

/// Find every `*.svg` file under `root`, recursively, sorted by path.
///
/// Hidden files and directories are skipped; symlinks are followed.
/// The order decides symbol order in the sprite, so it must not depend on
/// the walk's scheduling.
pub fn scan_icons(root: &Path) -> Result<Vec<IconFile>, CompileError> {
    if !root.is_dir() {
        return Err(CompileError::MissingDir(root.to_path_buf()));
    }

    let mut icons = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort(true) {
        let entry = entry.map_err(|e| CompileError::Walk(root.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_svg(&path) {
            continue;
        }

        let mtime = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| CompileError::Stat(path.clone(), e))?;
        icons.push(IconFile { path, mtime });
    }

    icons.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(icons)
}

#[inline]
fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "svg")
}
