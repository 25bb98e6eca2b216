//! Single icon compilation: read → optimize → stroke → `<symbol>`.

use std::fs;
use std::path::Path;

use super::CompileError;
use crate::debug;
use crate::svg::{OptimizeOptions, optimize_svg, replace_first_stroke};
use crate::symbol::wrap_as_symbol;

/// Per-directory settings shared by every icon compilation.
#[derive(Debug, Clone, Copy)]
pub struct IconSettings<'a> {
    /// Icon directory key, appended to every symbol id.
    pub dir_key: &'a str,
    /// Optimizer options, `None` when optimization is off.
    pub optimizer: Option<&'a OptimizeOptions>,
    pub replace_stroke: bool,
}

/// Compile one icon file into a `<symbol>` fragment.
///
/// The rendered symbol id is `{symbol_id}-{dir_key}`, unique across icon
/// directories. Unreadable files fail; optimizer failures fall back to the
/// source markup.
pub fn compile_icon(
    file_path: &Path,
    symbol_id: &str,
    settings: &IconSettings<'_>,
) -> Result<String, CompileError> {
    let source = fs::read_to_string(file_path)
        .map_err(|e| CompileError::Read(file_path.to_path_buf(), e))?;

    let content = match settings.optimizer {
        Some(options) => optimize_svg(&source, options).unwrap_or_else(|e| {
            debug!("optimize"; "{}: {:#}, using source", file_path.display(), e);
            source
        }),
        None => source,
    };

    let content = if settings.replace_stroke {
        replace_first_stroke(&content).into_owned()
    } else {
        content
    };

    let id = format!("{symbol_id}-{}", settings.dir_key);
    wrap_as_symbol(&id, &content).map_err(|e| CompileError::Symbol(file_path.to_path_buf(), e))
}
