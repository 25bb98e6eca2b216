//! Core types shared across the codebase.

mod mode;

pub use mode::{HostCommand, Mode};
