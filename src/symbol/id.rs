//! Symbol id derivation from icon paths.
//!
//! A template such as `icon-[dir]-[name]` maps a path relative to its icon
//! directory onto a symbol id:
//!
//! ```text
//! arrow.svg          ──► icon-arrow
//! nav/arrow.svg      ──► icon-nav-arrow
//! nav/small/up.svg   ──► icon-nav-small-up
//! ```

use std::fmt;

/// Placeholder for the icon file name.
pub const NAME_PLACEHOLDER: &str = "[name]";

/// Placeholder for the icon's directory, relative to the icon root.
pub const DIR_PLACEHOLDER: &str = "[dir]";

/// Default symbol id template.
pub const DEFAULT_TEMPLATE: &str = "icon-[dir]-[name]";

/// A symbol id template that is known to contain `[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolIdTemplate(String);

/// Error returned when a template lacks the `[name]` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("symbol id template `{0}` must contain `[name]`")]
pub struct MissingNamePlaceholder(pub String);

impl SymbolIdTemplate {
    /// Parse and validate a template.
    pub fn parse(template: impl Into<String>) -> Result<Self, MissingNamePlaceholder> {
        let template = template.into();
        if !template.contains(NAME_PLACEHOLDER) {
            return Err(MissingNamePlaceholder(template));
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn has_dir(&self) -> bool {
        self.0.contains(DIR_PLACEHOLDER)
    }

    /// Derive the symbol id for `relative_path`.
    pub fn derive(&self, relative_path: &str) -> String {
        derive_symbol_id(relative_path, self)
    }
}

impl Default for SymbolIdTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for SymbolIdTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a symbol id from an icon path relative to its icon directory.
///
/// With `[dir]` in the template, `[dir]` receives the directory part (path
/// separators become `-`) and `[name]` the file name without extension. An
/// empty directory part drops one `-` next to the placeholder so
/// `icon-[dir]-[name]` yields `icon-arrow`, not `icon--arrow`. Without
/// `[dir]`, `[name]` receives the whole relative path without extension.
/// A file extension left at the end of the result by literal template text
/// (`[name].svg`) is stripped last.
pub fn derive_symbol_id(relative_path: &str, template: &SymbolIdTemplate) -> String {
    let relative_path = relative_path.replace('\\', "/");
    let (dir_part, file_name) = split_dir(&relative_path);

    let mut id = template.as_str().to_string();
    let name = if template.has_dir() {
        let dir_name = dir_part.replace('/', "-");
        id = if dir_name.is_empty() {
            remove_empty_dir(&id)
        } else {
            id.replace(DIR_PLACEHOLDER, &dir_name)
        };
        strip_extension(file_name)
    } else {
        strip_extension(&relative_path)
    };

    id = id.replace(NAME_PLACEHOLDER, name);
    if let Some(ext) = extension(file_name)
        && id.ends_with(ext)
    {
        id.truncate(id.len() - ext.len());
    }
    id
}

/// Split `a/b/c.svg` into (`a/b`, `c.svg`).
fn split_dir(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Remove every `[dir]` placeholder together with one adjacent `-`.
fn remove_empty_dir(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find(DIR_PLACEHOLDER) {
        let before = &rest[..idx];
        let after = &rest[idx + DIR_PLACEHOLDER.len()..];

        if let Some(stripped) = after.strip_prefix('-') {
            out.push_str(before);
            rest = stripped;
        } else if let Some(stripped) = before.strip_suffix('-') {
            out.push_str(stripped);
            rest = after;
        } else {
            out.push_str(before);
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Extension of the last path component, dot included (`a/b.c.svg` -> `.svg`).
fn extension(path: &str) -> Option<&str> {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[file_start..].rfind('.') {
        // A leading dot is a hidden-file name, not an extension
        Some(0) | None => None,
        Some(dot) => Some(&path[file_start + dot..]),
    }
}

/// Strip the extension of the last path component (`a/b.c.svg` -> `a/b.c`).
fn strip_extension(path: &str) -> &str {
    match extension(path) {
        Some(ext) => &path[..path.len() - ext.len()],
        None => path,
    }
}
