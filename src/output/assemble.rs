//! Sprite assembly: symbol markup to dev module source or build document.

use crate::config::InjectPosition;
use crate::core::Mode;
use crate::embed::dev::{INJECT_JS, InjectVars};
use crate::symbol::{XMLNS, XMLNS_LINK};

/// Id of the root element of a build sprite document.
pub const COLLECTION_ID: &str = "svg-collection";

/// Final artifact for one icon directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOutput {
    /// Icon directory key.
    pub target_key: String,
    /// Module source (dev) or SVG document (build).
    pub code: String,
}

/// Development host element settings.
#[derive(Debug, Clone, Copy)]
pub struct DomOptions<'a> {
    pub inject: InjectPosition,
    /// Id base; the element id is `{custom_dom_id}-{key}`.
    pub custom_dom_id: &'a str,
}

/// Assemble the concatenated symbols of `dir_key` for `mode`.
pub fn assemble(markup: &str, mode: Mode, dom: &DomOptions<'_>, dir_key: &str) -> CompiledOutput {
    let symbols = strip_namespaces(markup);
    let code = match mode {
        Mode::Dev => dev_module(&symbols, dom, dir_key),
        Mode::Build => build_document(&symbols),
    };

    CompiledOutput {
        target_key: dir_key.to_string(),
        code,
    }
}

/// Remove the per-symbol namespace declarations.
///
/// The sprite root (or the runtime host element) declares them once.
pub fn strip_namespaces(markup: &str) -> String {
    let xmlns = format!(r#"xmlns="{XMLNS}""#);
    let xmlns_link = format!(r#"xmlns:xlink="{XMLNS_LINK}""#);

    let mut out = markup.to_string();
    for attr in [xmlns, xmlns_link] {
        out = out.replace(&format!(" {attr}"), "").replace(&attr, "");
    }
    out
}

/// Host element id for `dir_key`.
#[inline]
pub fn dom_id(custom_dom_id: &str, dir_key: &str) -> String {
    format!("{custom_dom_id}-{dir_key}")
}

/// Script module injecting the sprite into the DOM, no exported value.
fn dev_module(symbols: &str, dom: &DomOptions<'_>, dir_key: &str) -> String {
    let dom_id = dom_id(dom.custom_dom_id, dir_key);
    let script = INJECT_JS.render(&InjectVars {
        dom_id: &dom_id,
        position: dom.inject,
        symbols,
    });
    format!("{script}\nexport default {{}}")
}

/// Standalone hidden sprite document.
fn build_document(symbols: &str) -> String {
    let xlink = if symbols.contains("xlink:") {
        format!(r#" xmlns:xlink="{XMLNS_LINK}""#)
    } else {
        String::new()
    };
    format!(
        r#"<svg id="{COLLECTION_ID}" xmlns="{XMLNS}"{xlink} style="position:absolute;width:0;height:0">{symbols}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOM: DomOptions<'static> = DomOptions {
        inject: InjectPosition::BodyLast,
        custom_dom_id: "__svg__icons__dom__",
    };

    fn symbol(id: &str) -> String {
        format!(
            r#"<symbol xmlns="{XMLNS}" xmlns:xlink="{XMLNS_LINK}" viewBox="0 0 1 1" id="{id}"><path/></symbol>"#
        )
    }

    #[test]
    fn test_strip_namespaces() {
        let markup = format!("{}{}", symbol("a"), symbol("b"));
        let stripped = strip_namespaces(&markup);
        assert!(!stripped.contains("xmlns"));
        assert!(stripped.starts_with(r#"<symbol viewBox="0 0 1 1" id="a">"#));
    }

    #[test]
    fn test_build_document() {
        let out = assemble(&symbol("a"), Mode::Build, &DOM, "app");
        assert_eq!(out.target_key, "app");
        assert_eq!(
            out.code,
            format!(
                r#"<svg id="svg-collection" xmlns="{XMLNS}" style="position:absolute;width:0;height:0"><symbol viewBox="0 0 1 1" id="a"><path/></symbol></svg>"#
            )
        );
    }

    #[test]
    fn test_build_document_declares_xlink_when_used() {
        let markup = r##"<symbol id="a"><use xlink:href="#b"/></symbol>"##;
        let out = assemble(markup, Mode::Build, &DOM, "app");
        assert!(out.code.contains(&format!(r#"xmlns:xlink="{XMLNS_LINK}""#)));
        assert_eq!(out.code.matches("xmlns:xlink").count(), 1);
    }

    #[test]
    fn test_dev_module_shape() {
        let out = assemble(&symbol("a"), Mode::Dev, &DOM, "app");
        assert!(out.code.ends_with("\nexport default {}"));
        assert!(out.code.contains("typeof window !== 'undefined'"));
        assert!(out.code.contains("document.readyState === 'loading'"));
        assert!(out.code.contains("DOMContentLoaded"));
    }

    /// Minimal document: `<body>` children as `(id, innerHTML)`.
    #[derive(Debug, Default)]
    struct FakeDocument {
        body: Vec<(String, String)>,
    }

    /// The single JSON string literal between `open` and `close` in `line`.
    fn literal(line: &str, open: &str, close: &str) -> String {
        let start = line.find(open).unwrap() + open.len();
        let end = line.rfind(close).unwrap();
        serde_json::from_str(&line[start..end]).unwrap()
    }

    impl FakeDocument {
        /// Execute the `loadSvg` statements of a dev module once.
        fn run(&mut self, code: &str) {
            let mut current: Option<usize> = None;
            let mut created: Option<(String, String)> = None;
            let mut skip_depth = 0usize;

            for line in code.lines().map(str::trim) {
                if skip_depth > 0 {
                    skip_depth += line.matches('{').count();
                    skip_depth -= line.matches('}').count();
                    continue;
                }

                if line.starts_with("var svgDom = document.getElementById(") {
                    let id = literal(line, "getElementById(", ");");
                    current = self.body.iter().position(|(el, _)| *el == id);
                } else if line == "if (!svgDom) {" {
                    if current.is_some() {
                        skip_depth = 1;
                    }
                } else if line.starts_with("svgDom = document.createElementNS(") {
                    created = Some((String::new(), String::new()));
                } else if line.starts_with("svgDom.id = ") {
                    let id = literal(line, "svgDom.id = ", ";");
                    created.as_mut().unwrap().0 = id;
                } else if line == "body.appendChild(svgDom);" {
                    self.body.push(created.take().unwrap());
                    current = Some(self.body.len() - 1);
                } else if line == "body.insertBefore(svgDom, body.firstChild);" {
                    self.body.insert(0, created.take().unwrap());
                    current = Some(0);
                } else if line.starts_with("svgDom.innerHTML = ") {
                    let markup = literal(line, "svgDom.innerHTML = ", ";");
                    self.body[current.unwrap()].1 = markup;
                }
            }
        }
    }

    #[test]
    fn test_dev_module_is_idempotent() {
        let code = assemble(&symbol("a"), Mode::Dev, &DOM, "app").code;
        let mut doc = FakeDocument::default();
        doc.body.push(("app-root".into(), String::new()));

        doc.run(&code);
        doc.run(&code);

        assert_eq!(doc.body.len(), 2);
        assert_eq!(doc.body[0].0, "app-root");
        assert_eq!(doc.body[1].0, "__svg__icons__dom__-app");
        assert_eq!(doc.body[1].1, r#"<symbol viewBox="0 0 1 1" id="a"><path/></symbol>"#);
    }

    #[test]
    fn test_dev_module_body_first_replaces_markup() {
        let dom = DomOptions {
            inject: InjectPosition::BodyFirst,
            ..DOM
        };
        let mut doc = FakeDocument::default();
        doc.body.push(("app-root".into(), String::new()));

        doc.run(&assemble(&symbol("a"), Mode::Dev, &dom, "app").code);
        doc.run(&assemble(&symbol("b"), Mode::Dev, &dom, "app").code);

        assert_eq!(doc.body.len(), 2);
        assert_eq!(doc.body[0].0, "__svg__icons__dom__-app");
        assert!(doc.body[0].1.contains(r#"id="b""#));
        assert!(!doc.body[0].1.contains(r#"id="a""#));
    }
}
