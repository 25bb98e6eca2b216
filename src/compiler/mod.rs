//! Icon set compilation.
//!
//! # Modules
//!
//! - [`scan`]: discover `*.svg` files with their mtimes
//! - [`cache`]: per-plugin symbol cache, valid while the mtime is unchanged
//! - [`icon`]: compile one file into a `<symbol>` fragment
//! - [`set`]: incremental compilation of a whole icon directory

pub mod cache;
mod error;
pub mod icon;
pub mod scan;
pub mod set;

pub use cache::{CacheEntry, SymbolCache};
pub use error::CompileError;
pub use icon::{IconSettings, compile_icon};
pub use scan::{IconFile, scan_icons};
pub use set::{CompiledSet, SymbolRef, compile_directory};
