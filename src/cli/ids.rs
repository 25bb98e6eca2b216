//! `ids`: list the symbol ids each icon directory produces.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;
use std::io::Write;

use crate::config::SvgIconsConfig;
use crate::log;
use crate::plugin::SvgIconsPlugin;

/// One listed symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRow {
    pub key: String,
    /// Final element id, `{symbol_id}-{key}`.
    pub element_id: String,
    pub relative_name: String,
    pub duplicate: bool,
}

/// Compile every directory and collect its symbols in sprite order.
pub fn collect_ids(plugin: &SvgIconsPlugin) -> Result<Vec<IdRow>> {
    let mut rows = Vec::new();

    for icon_dir in &plugin.config().icon_dirs {
        let set = plugin
            .compile_set(icon_dir)
            .with_context(|| format!("failed to compile icons of `{}`", icon_dir.key))?;
        let duplicates: FxHashSet<&str> = set.duplicates.iter().map(String::as_str).collect();

        rows.extend(set.symbols.iter().map(|symbol| IdRow {
            key: icon_dir.key.clone(),
            element_id: format!("{}-{}", symbol.symbol_id, icon_dir.key),
            relative_name: symbol.relative_name.clone(),
            duplicate: duplicates.contains(symbol.symbol_id.as_str()),
        }));
    }

    Ok(rows)
}

pub fn list_ids(config: SvgIconsConfig) -> Result<()> {
    let plugin = SvgIconsPlugin::new(config)?;
    let rows = collect_ids(&plugin)?;

    let mut stdout = std::io::stdout().lock();
    for row in &rows {
        if row.duplicate {
            writeln!(
                stdout,
                "{}\t{}\t{}",
                row.key,
                row.element_id.red(),
                row.relative_name
            )?;
        } else {
            writeln!(stdout, "{}\t{}\t{}", row.key, row.element_id, row.relative_name)?;
        }
    }

    let duplicates = rows.iter().filter(|row| row.duplicate).count();
    if duplicates > 0 {
        log!("warning"; "{} icons share a symbol id with another icon", duplicates);
    }
    Ok(())
}
