//! Embedded script templates with typed placeholder substitution.

use std::marker::PhantomData;

/// Values for one template's placeholders.
pub trait TemplateVars {
    /// `(placeholder, replacement)` pairs, applied in order.
    ///
    /// Later replacements are not scanned for earlier placeholders, so
    /// untrusted text (symbol markup) goes last.
    fn substitutions(&self) -> Vec<(&'static str, String)>;
}

/// An embedded template that only renders with its own variable set `V`.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    source: &'static str,
    _vars: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            _vars: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.substitutions()
            .into_iter()
            .fold(self.source.to_string(), |out, (placeholder, value)| {
                out.replace(placeholder, &value)
            })
    }
}
