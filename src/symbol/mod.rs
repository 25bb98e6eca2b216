//! Symbol ids and `<symbol>` rendering.
//!
//! - [`id`]: symbol id templates (`icon-[dir]-[name]`) and derivation
//! - [`wrap`]: standalone `<svg>` markup to `<symbol>` fragment

pub mod id;
pub mod wrap;

pub use id::{MissingNamePlaceholder, SymbolIdTemplate, derive_symbol_id};
pub use wrap::{SymbolError, XMLNS, XMLNS_LINK, wrap_as_symbol};
