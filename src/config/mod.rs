//! Plugin configuration: `svg-icons.toml` or programmatic construction.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error     # ConfigError, ConfigDiagnostics
//! ├── field     # FieldPath
//! ├── options   # IconDir, InjectPosition, OptimizerSetting
//! ├── util      # config discovery, path resolution
//! └── mod.rs    # SvgIconsConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! symbol_id = "icon-[dir]-[name]"
//! inject = "body-last"
//! out_dir = "dist/icons"
//! svgo = { dpi = 96.0 }
//!
//! [[icon_dirs]]
//! key = "app"
//! path = "src/assets/icons"
//! ```

mod error;
mod field;
mod options;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::{FieldPath, fields};
pub use options::{IconDir, InjectPosition, OptimizerSetting};
pub use util::{find_config_file, resolve_config_path};

use crate::log;
use crate::symbol::SymbolIdTemplate;
use crate::symbol::id::{DEFAULT_TEMPLATE, NAME_PLACEHOLDER};
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default id base of the development sprite host element.
pub const DEFAULT_DOM_ID: &str = "__svg__icons__dom__";

/// Default config file name.
pub const CONFIG_FILE: &str = "svg-icons.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svg-icons.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgIconsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Icon directories, one sprite each
    pub icon_dirs: Vec<IconDir>,

    /// Optimizer toggle or options
    pub svgo: OptimizerSetting,

    /// Symbol id template, must contain `[name]`
    pub symbol_id: String,

    /// Development host element position
    pub inject: InjectPosition,

    /// Development host element id base (`{custom_dom_id}-{key}`)
    pub custom_dom_id: String,

    /// Rewrite the first `stroke="..."` of each icon to `currentColor`
    pub replace_stroke_with_current_color: bool,

    /// Write build sprites here instead of emitting them as host assets
    pub out_dir: Option<PathBuf>,

    /// Force build (`true`) or dev (`false`) mode regardless of host command
    pub is_build: Option<bool>,
}

impl Default for SvgIconsConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            icon_dirs: Vec::new(),
            svgo: OptimizerSetting::default(),
            symbol_id: DEFAULT_TEMPLATE.to_string(),
            inject: InjectPosition::default(),
            custom_dom_id: DEFAULT_DOM_ID.to_string(),
            replace_stroke_with_current_color: true,
            out_dir: None,
            is_build: None,
        }
    }
}

impl SvgIconsConfig {
    /// Create a config with defaults for everything but the icon directories.
    pub fn new(icon_dirs: Vec<IconDir>) -> Self {
        Self {
            icon_dirs,
            ..Self::default()
        }
    }

    /// Find and load the config file, searching upward from `cwd`.
    ///
    /// The config file's directory becomes the root for relative paths.
    pub fn load(config_name: &Path, cwd: &Path) -> Result<Self> {
        let config_path = find_config_file(config_name, cwd)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.config_path = crate::utils::path::normalize_path(&config_path);
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Parse the symbol id template.
    ///
    /// Only fails for configs that skipped [`validate`](Self::validate).
    pub fn symbol_template(&self) -> Result<SymbolIdTemplate, ConfigError> {
        SymbolIdTemplate::parse(self.symbol_id.as_str()).map_err(|e| {
            let mut diag = ConfigDiagnostics::new();
            diag.error(fields::SYMBOL_ID, e.to_string());
            ConfigError::Diagnostics(diag)
        })
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve icon and output directories against `root`.
    pub fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);

        for dir in &mut self.icon_dirs {
            dir.path = resolve_config_path(&dir.path, &root);
        }
        if let Some(out_dir) = self.out_dir.take() {
            self.out_dir = Some(resolve_config_path(&out_dir, &root));
        }

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if !self.symbol_id.contains(NAME_PLACEHOLDER) {
            diag.error_with_hint(
                fields::SYMBOL_ID,
                format!("`{}` must contain [name]", self.symbol_id),
                format!("for example \"{DEFAULT_TEMPLATE}\""),
            );
        }

        if self.custom_dom_id.trim().is_empty() {
            diag.error(fields::CUSTOM_DOM_ID, "must not be empty");
        }

        if let Some(out_dir) = &self.out_dir
            && out_dir.is_file()
        {
            diag.error(
                fields::OUT_DIR,
                format!("`{}` is a file, expected a directory", out_dir.display()),
            );
        }

        self.validate_icon_dirs(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn validate_icon_dirs(&self, diag: &mut ConfigDiagnostics) {
        if self.icon_dirs.is_empty() {
            diag.error_with_hint(
                fields::ICON_DIRS,
                "at least one icon directory is required",
                "add [[icon_dirs]] with `key` and `path`",
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for dir in &self.icon_dirs {
            if dir.key.is_empty() {
                diag.error(fields::ICON_DIRS, "icon directory key must not be empty");
            } else if dir.key.contains(['/', '\\']) {
                diag.error(
                    fields::ICON_DIRS,
                    format!("key `{}` is used as a file name and must not contain path separators", dir.key),
                );
            } else if !seen.insert(dir.key.as_str()) {
                diag.error(fields::ICON_DIRS, format!("duplicate key `{}`", dir.key));
            }
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SvgIconsConfig {
    let (parsed, ignored) = SvgIconsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = "[[icon_dirs]]\nkey = \"app\"\npath = \"icons\"\n";

    #[test]
    fn test_defaults() {
        let config = test_parse_config(MINIMAL);
        assert_eq!(config.symbol_id, "icon-[dir]-[name]");
        assert_eq!(config.inject, InjectPosition::BodyLast);
        assert_eq!(config.custom_dom_id, DEFAULT_DOM_ID);
        assert!(config.replace_stroke_with_current_color);
        assert!(config.svgo.resolve().is_some());
        assert!(config.out_dir.is_none());
        assert!(config.is_build.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SvgIconsConfig::from_str("[[icon_dirs]\nkey = 1").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("{MINIMAL}unknown_option = 1\n");
        let (_, ignored) = SvgIconsConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown_option")));
    }

    #[test]
    fn test_validate_symbol_id_without_name() {
        let config = test_parse_config(&format!("symbol_id = \"icon-[dir]\"\n{MINIMAL}"));
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.errors()[0].field, fields::SYMBOL_ID);
        assert!(config.symbol_template().is_err());
    }

    #[test]
    fn test_validate_icon_dirs() {
        let config = test_parse_config("");
        assert!(config.validate().is_err());

        let config = test_parse_config(
            "[[icon_dirs]]\nkey = \"a\"\npath = \"x\"\n[[icon_dirs]]\nkey = \"a\"\npath = \"y\"\n[[icon_dirs]]\nkey = \"\"\npath = \"z\"\n",
        );
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            format!("out_dir = \"dist/icons\"\n{MINIMAL}"),
        )
        .unwrap();

        let config = SvgIconsConfig::load(Path::new(CONFIG_FILE), &nested).unwrap();
        let root = crate::utils::path::normalize_path(dir.path());

        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.icon_dirs[0].path, root.join("icons"));
        assert_eq!(config.out_dir, Some(root.join("dist/icons")));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = SvgIconsConfig::load(Path::new("no-such-svg-icons.toml"), dir.path());
        assert!(err.is_err());
    }
}
