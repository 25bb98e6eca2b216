//! Incremental compilation of a whole icon directory.
//!
//! ```text
//! scan_icons ──► fresh in cache? ──yes──► reuse markup + id
//!                      │
//!                      no
//!                      ▼
//!              derive id + compile_icon (parallel)
//!                      │
//!                      ▼
//!              write cache entries ──► concatenate in scan order
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::cache::{CacheEntry, SymbolCache};
use super::icon::{IconSettings, compile_icon};
use super::scan::{IconFile, scan_icons};
use super::CompileError;
use crate::config::IconDir;
use crate::symbol::SymbolIdTemplate;
use crate::utils::path::relative_slash_path;
use crate::{debug, log};

/// A symbol in the compiled set, in sprite order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRef {
    pub symbol_id: String,
    pub relative_name: String,
}

/// Result of compiling one icon directory.
#[derive(Debug, Clone, Default)]
pub struct CompiledSet {
    /// Concatenated `<symbol>` fragments in discovery order.
    pub markup: String,
    pub symbols: Vec<SymbolRef>,
    /// Number of icons compiled in this pass (cache misses).
    pub recompiled: usize,
    /// Symbol ids produced by more than one file.
    pub duplicates: Vec<String>,
}

/// Compile every icon under `icon_dir`, reusing cached symbols whose source
/// mtime is unchanged.
///
/// Any unreadable or unwrappable icon aborts the directory; cache entries
/// are only written once every stale icon compiled.
pub fn compile_directory(
    icon_dir: &IconDir,
    cache: &SymbolCache,
    template: &SymbolIdTemplate,
    settings: &IconSettings<'_>,
) -> Result<CompiledSet, CompileError> {
    let icons = scan_icons(&icon_dir.path)?;

    let mut entries: Vec<Option<CacheEntry>> = icons
        .iter()
        .map(|icon| cache.get_fresh(&icon_dir.key, &icon.path, icon.mtime))
        .collect();

    let stale: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| entry.is_none().then_some(i))
        .collect();

    let compiled = stale
        .par_iter()
        .map(|&i| compile_entry(&icons[i], icon_dir, template, settings).map(|e| (i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let recompiled = compiled.len();
    for (i, entry) in compiled {
        cache.insert(&icon_dir.key, &icons[i].path, entry.clone());
        entries[i] = Some(entry);
    }

    debug!("compile"; "{}: {} icons, {} recompiled", icon_dir.key, icons.len(), recompiled);

    let mut set = CompiledSet {
        recompiled,
        ..CompiledSet::default()
    };
    let mut seen = FxHashSet::default();

    for entry in entries.into_iter().flatten() {
        if !seen.insert(entry.symbol_id.clone()) && !set.duplicates.contains(&entry.symbol_id) {
            set.duplicates.push(entry.symbol_id.clone());
        }
        set.markup.push_str(&entry.markup);
        set.symbols.push(SymbolRef {
            symbol_id: entry.symbol_id,
            relative_name: entry.relative_name,
        });
    }

    if !set.duplicates.is_empty() {
        log!("warning"; "{}: duplicate symbol ids: {}", icon_dir.key, set.duplicates.join(", "));
    }

    Ok(set)
}

fn compile_entry(
    icon: &IconFile,
    icon_dir: &IconDir,
    template: &SymbolIdTemplate,
    settings: &IconSettings<'_>,
) -> Result<CacheEntry, CompileError> {
    let relative_name = relative_slash_path(&icon.path, &icon_dir.path);
    let symbol_id = template.derive(&relative_name);
    let markup = compile_icon(&icon.path, &symbol_id, settings)?;

    Ok(CacheEntry {
        mtime: icon.mtime,
        relative_name,
        markup,
        symbol_id,
    })
}
