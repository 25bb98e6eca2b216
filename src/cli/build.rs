//! `build`: write one sprite document per icon directory.
//!
//! Stands in for a host build: the plugin runs in build mode, sprites go to
//! `out_dir` when configured, otherwise through the host asset registry into
//! `dist/icons` under the config root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{SvgIconsConfig, resolve_config_path};
use crate::core::HostCommand;
use crate::log;
use crate::output::{AssetSink, DirectorySink, EmittedAssets};
use crate::plugin::{SvgIconsPlugin, register_id};

/// Host output directory for emitted assets.
pub const DEFAULT_DIST: &str = "dist/icons";

pub fn build_sprites(mut config: SvgIconsConfig, out_dir: Option<&Path>) -> Result<()> {
    if let Some(out_dir) = out_dir {
        config.out_dir = Some(resolve_config_path(out_dir, config.get_root()));
    }
    config.is_build = Some(true);

    let dist = config.get_root().join(DEFAULT_DIST);
    let first_key = config.icon_dirs.first().map(|dir| dir.key.clone());
    let plugin = SvgIconsPlugin::new(config)?;
    plugin.config_resolved(HostCommand::Build);
    plugin.build_start();

    let Some(first_key) = first_key else {
        return Ok(());
    };

    let mut host = EmittedAssets::new();
    plugin.load(&register_id(&first_key), &mut host)?;

    let written = if host.is_empty() {
        plugin.config().out_dir.clone()
    } else {
        Some(write_emitted(host, dist)?)
    };

    if let Some(dir) = written {
        log!("build"; "sprites written to {}", dir.display());
    }
    Ok(())
}

/// Write host-collected assets the way a bundler would.
fn write_emitted(host: EmittedAssets, dist: PathBuf) -> Result<PathBuf> {
    let mut sink = DirectorySink::new(dist);
    for asset in host.into_assets() {
        sink.emit(&asset.file_name, &asset.source)
            .with_context(|| format!("failed to write asset `{}`", asset.file_name))?;
    }
    Ok(sink.dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconDir;
    use std::fs;
    use tempfile::TempDir;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8"><path d="M0 0h8v8z"/></svg>"#;

    fn project() -> (TempDir, SvgIconsConfig) {
        let tmp = TempDir::new().unwrap();
        let icons = tmp.path().join("icons");
        fs::create_dir_all(&icons).unwrap();
        fs::write(icons.join("square.svg"), ICON).unwrap();

        let mut config = SvgIconsConfig::new(vec![IconDir::new("app", icons)]);
        config.normalize_paths(tmp.path());
        (tmp, config)
    }

    #[test]
    fn test_build_falls_back_to_dist() {
        let (tmp, config) = project();
        build_sprites(config, None).unwrap();

        let sprite = fs::read_to_string(tmp.path().join(DEFAULT_DIST).join("app.svg")).unwrap();
        assert!(sprite.contains(r#"id="icon-square-app""#));
    }

    #[test]
    fn test_build_out_dir_flag() {
        let (tmp, config) = project();
        build_sprites(config, Some(Path::new("public/sprites"))).unwrap();

        assert!(tmp.path().join("public/sprites/app.svg").is_file());
        assert!(!tmp.path().join(DEFAULT_DIST).exists());
    }
}
