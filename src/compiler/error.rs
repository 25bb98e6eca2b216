//! Icon compilation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::symbol::SymbolError;

/// Errors that abort compilation of an icon directory.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to scan icon directory `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("icon directory `{0}` does not exist")]
    MissingDir(PathBuf),

    #[error("failed to read modification time of `{0}`")]
    Stat(PathBuf, #[source] std::io::Error),

    #[error("failed to read icon `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to build symbol for `{0}`")]
    Symbol(PathBuf, #[source] SymbolError),
}
