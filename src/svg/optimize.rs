//! SVG optimization using usvg.
//!
//! Parses the icon into a normalized tree and writes it back minified:
//! styles resolved into attributes, shapes converted to paths, unused
//! definitions removed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options for SVG optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// DPI for unit conversion (`mm`, `pt`, ...).
    pub dpi: f32,
    /// Decimal places kept for path coordinates.
    pub coordinates_precision: u8,
    /// Decimal places kept for transform values.
    pub transforms_precision: u8,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            coordinates_precision: 8,
            transforms_precision: 8,
        }
    }
}

/// Optimize SVG markup using usvg
///
/// Returns the re-serialized document, or an error when usvg cannot parse
/// the input. Callers decide whether that is fatal.
pub fn optimize_svg(content: &str, options: &OptimizeOptions) -> Result<String> {
    let usvg_options = usvg::Options {
        dpi: options.dpi,
        ..Default::default()
    };

    let tree =
        usvg::Tree::from_str(content, &usvg_options).context("Failed to parse SVG")?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        coordinates_precision: options.coordinates_precision,
        transforms_precision: options.transforms_precision,
        ..Default::default()
    };

    Ok(tree.to_string(&write_options))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
        <rect x="2" y="2" width="20" height="20" stroke="red" fill="none"/>
    </svg>"#;

    #[test]
    fn test_optimize_produces_svg() {
        let out = optimize_svg(ICON, &OptimizeOptions::default()).unwrap();
        assert!(out.contains("<svg"));
        assert!(out.contains("<path"));
    }

    #[test]
    fn test_optimize_rejects_garbage() {
        assert!(optimize_svg("not an svg", &OptimizeOptions::default()).is_err());
    }

    #[test]
    fn test_options_partial_deserialize() {
        let options: OptimizeOptions = toml::from_str("dpi = 72.0").unwrap();
        assert_eq!(options.dpi, 72.0);
        assert_eq!(options.coordinates_precision, 8);
    }
}
