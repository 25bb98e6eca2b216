//! Command-line interface module.
//!
//! The CLI plays the host tool: it drives [`SvgIconsPlugin`](crate::plugin::SvgIconsPlugin)
//! through the same hooks a bundler would call.

mod args;
pub mod build;
pub mod ids;
pub mod load;

pub use args::{Cli, Commands, CommonArgs};
