//! svg-icons - SVG icon sprite builder for bundler hosts.
//!
//! Compiles directories of SVG icons into `<symbol>` sprites: injected into
//! the DOM by a virtual module during development, written as static sprite
//! documents for production builds.
//!
//! # Module Structure
//!
//! ```text
//! plugin     host hooks: config_resolved, build_start, resolve_id, load
//!   ├── compiler   scan, cache, per-icon compile, directory compile
//!   │     ├── svg      usvg optimization, stroke normalization
//!   │     └── symbol   id templates, <svg> → <symbol> wrapping
//!   └── output     dev module / build document, asset sinks, out_dir reset
//! config     svg-icons.toml, validation diagnostics
//! cli        stand-in host for the command line
//! ```

pub mod logger;

pub mod cli;
pub mod compiler;
pub mod config;
pub mod core;
pub mod embed;
pub mod output;
pub mod plugin;
pub mod svg;
pub mod symbol;
pub mod utils;

pub use config::SvgIconsConfig;
pub use plugin::SvgIconsPlugin;
