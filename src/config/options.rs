//! Option value types shared by the config file and the plugin API.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::svg::OptimizeOptions;

/// A named group of icons producing one sprite artifact.
///
/// ```toml
/// [[icon_dirs]]
/// key = "app"
/// path = "src/assets/icons"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDir {
    /// Sprite name: output file `{key}.svg`, DOM id suffix, symbol id suffix.
    pub key: String,
    /// Icon root, absolute after config loading.
    pub path: PathBuf,
}

impl IconDir {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Where the development sprite host element goes in `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjectPosition {
    /// Before the first child of `<body>`.
    BodyFirst,
    /// After the last child of `<body>`.
    #[default]
    BodyLast,
}

/// `svgo = true | false | { dpi = 96.0, ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptimizerSetting {
    Enabled(bool),
    Custom(OptimizeOptions),
}

impl Default for OptimizerSetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl OptimizerSetting {
    /// Resolve to concrete options, `None` when optimization is off.
    pub fn resolve(&self) -> Option<OptimizeOptions> {
        match self {
            Self::Enabled(true) => Some(OptimizeOptions::default()),
            Self::Enabled(false) => None,
            Self::Custom(options) => Some(options.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Section {
        #[serde(default)]
        svgo: OptimizerSetting,
        #[serde(default)]
        inject: InjectPosition,
    }

    #[test]
    fn test_optimizer_setting_forms() {
        let section: Section = toml::from_str("").unwrap();
        assert_eq!(section.svgo.resolve(), Some(OptimizeOptions::default()));

        let section: Section = toml::from_str("svgo = false").unwrap();
        assert_eq!(section.svgo.resolve(), None);

        let section: Section = toml::from_str("svgo = { dpi = 72.0 }").unwrap();
        assert_eq!(section.svgo.resolve().map(|o| o.dpi), Some(72.0));
    }

    #[test]
    fn test_inject_parsing() {
        let section: Section = toml::from_str("inject = \"body-first\"").unwrap();
        assert_eq!(section.inject, InjectPosition::BodyFirst);

        let section: Section = toml::from_str("").unwrap();
        assert_eq!(section.inject, InjectPosition::BodyLast);

        assert!(toml::from_str::<Section>("inject = \"head\"").is_err());
    }
}
