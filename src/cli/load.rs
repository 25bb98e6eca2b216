//! `load`: print the development module for a virtual id.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::SvgIconsConfig;
use crate::core::HostCommand;
use crate::log;
use crate::output::EmittedAssets;
use crate::plugin::SvgIconsPlugin;

pub fn load_module(config: SvgIconsConfig, id: &str, output: Option<&Path>) -> Result<()> {
    let plugin = SvgIconsPlugin::new(config)?;
    plugin.config_resolved(HostCommand::Serve);

    if plugin.resolve_id(id).is_none() {
        bail!("`{id}` is not an svg-icons module id");
    }

    let mut host = EmittedAssets::new();
    let Some(code) = plugin.load(id, &mut host)? else {
        let keys: Vec<_> = plugin.config().icon_dirs.iter().map(|d| d.key.as_str()).collect();
        bail!("no icon directory matches `{id}` (keys: {})", keys.join(", "));
    };

    match output {
        Some(path) => {
            fs::write(path, &code).with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("load"; "wrote {} to {}", id, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{code}")?;
        }
    }
    Ok(())
}
