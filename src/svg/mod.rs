//! SVG markup processing applied to each icon before it becomes a symbol.
//!
//! - [`optimize`]: usvg round-trip (minification, style resolution)
//! - [`stroke`]: first-stroke normalization to `currentColor`

mod optimize;
mod stroke;

pub use optimize::{OptimizeOptions, optimize_svg};
pub use stroke::replace_first_stroke;
