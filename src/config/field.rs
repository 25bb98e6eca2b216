//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path such as `icon_dirs` or `svgo.dpi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

/// Field paths of the root config, for diagnostics.
pub mod fields {
    use super::FieldPath;

    pub const ICON_DIRS: FieldPath = FieldPath::new("icon_dirs");
    pub const SYMBOL_ID: FieldPath = FieldPath::new("symbol_id");
    pub const CUSTOM_DOM_ID: FieldPath = FieldPath::new("custom_dom_id");
    pub const OUT_DIR: FieldPath = FieldPath::new("out_dir");
}
