//! Sprite output.
//!
//! - [`assemble`]: symbol markup to dev module source or build document
//! - [`sink`]: where build documents go (host assets or a directory)
//! - [`reset`]: once-per-build cleanup of the output directory

pub mod assemble;
pub mod reset;
pub mod sink;

pub use assemble::{CompiledOutput, DomOptions, assemble, dom_id, strip_namespaces};
pub use reset::reset_out_dir;
pub use sink::{AssetSink, DirectorySink, EmittedAsset, EmittedAssets};
