//! Per-plugin cache of compiled symbols.
//!
//! Keyed by icon directory key and absolute icon path: the markup carries
//! the directory-specific element id, so two icon directories sharing a
//! folder never share entries. An entry is valid iff the file's current
//! modification time equals [`CacheEntry::mtime`]; there is no other
//! eviction. Entries for different keys can be written concurrently.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A compiled icon and the mtime it was compiled at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub mtime: SystemTime,
    /// Path relative to the icon directory, `/`-separated.
    pub relative_name: String,
    /// Rendered `<symbol>` fragment.
    pub markup: String,
    pub symbol_id: String,
}

type CacheKey = (String, PathBuf);

/// Symbol cache owned by one plugin instance (thread-safe).
#[derive(Debug, Default)]
pub struct SymbolCache {
    entries: DashMap<CacheKey, CacheEntry>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn key(dir_key: &str, path: &Path) -> CacheKey {
        (dir_key.to_string(), path.to_path_buf())
    }

    /// Return the entry for `path` in `dir_key` if it was compiled at `mtime`.
    pub fn get_fresh(&self, dir_key: &str, path: &Path, mtime: SystemTime) -> Option<CacheEntry> {
        self.entries
            .get(&Self::key(dir_key, path))
            .filter(|entry| entry.mtime == mtime)
            .map(|entry| entry.value().clone())
    }

    pub fn get(&self, dir_key: &str, path: &Path) -> Option<CacheEntry> {
        self.entries
            .get(&Self::key(dir_key, path))
            .map(|entry| entry.value().clone())
    }

    pub fn insert(&self, dir_key: &str, path: &Path, entry: CacheEntry) {
        self.entries.insert(Self::key(dir_key, path), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
