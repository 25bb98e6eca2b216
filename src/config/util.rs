//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/app/src/components/  ← start
/// /home/user/app/svg-icons.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve a configured path against the config root, expanding `~`.
pub fn resolve_config_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        root.join(&path)
    } else {
        path
    };
    crate::utils::path::normalize_path(&full_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("svg-icons.toml"), "").unwrap();

        let found = find_config_file(Path::new("svg-icons.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("svg-icons.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-config-name.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_resolve_config_path_relative() {
        let resolved = resolve_config_path(Path::new("icons"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/project/icons"));
    }

    #[test]
    fn test_resolve_config_path_absolute() {
        let resolved = resolve_config_path(Path::new("/abs/icons"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/abs/icons"));
    }
}
