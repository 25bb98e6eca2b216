//! Embedded static resources.
//!
//! - `template` - typed placeholder substitution
//! - `dev` - Development-mode DOM injection script (inject.js)
//!
//! # Usage
//!
//! ```ignore
//! use embed::dev::{INJECT_JS, InjectVars};
//!
//! let js = INJECT_JS.render(&InjectVars { dom_id: "__svg__icons__dom__-app", .. });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod dev {
    use super::{Template, TemplateVars};
    use crate::config::InjectPosition;
    use crate::symbol::{XMLNS, XMLNS_LINK};

    /// Variables for inject.js template.
    pub struct InjectVars<'a> {
        /// Host element id, `{custom_dom_id}-{key}`.
        pub dom_id: &'a str,
        pub position: InjectPosition,
        /// Symbol markup set as the host's `innerHTML`.
        pub symbols: &'a str,
    }

    /// JS string literal for `value`.
    fn js_string(value: &str) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
    }

    /// Statement inserting the freshly created host into `<body>`.
    fn insert_statement(position: InjectPosition) -> &'static str {
        match position {
            InjectPosition::BodyFirst => "body.insertBefore(svgDom, body.firstChild);",
            InjectPosition::BodyLast => "body.appendChild(svgDom);",
        }
    }

    impl TemplateVars for InjectVars<'_> {
        fn substitutions(&self) -> Vec<(&'static str, String)> {
            vec![
                ("__SVG_ICONS_DOM_ID__", js_string(self.dom_id)),
                ("__SVG_ICONS_XMLNS_LINK__", js_string(XMLNS_LINK)),
                ("__SVG_ICONS_XMLNS__", js_string(XMLNS)),
                ("__SVG_ICONS_INSERT__", insert_statement(self.position).to_string()),
                ("__SVG_ICONS_SYMBOLS__", js_string(self.symbols)),
            ]
        }
    }

    /// Idempotent DOM injection script for the development sprite.
    pub const INJECT_JS: Template<InjectVars<'static>> =
        Template::new(include_str!("dev/inject.js"));
}
