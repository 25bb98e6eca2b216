//! Wrap standalone SVG markup into a `<symbol>` fragment.
//!
//! The root `<svg>` element becomes `<symbol>`: presentation attributes
//! (`viewBox`, `fill`, `stroke`, ...) and editor namespace declarations are
//! kept, sizing and identity attributes are dropped, and the children are
//! copied verbatim.
//!
//! ```text
//! <svg width="24" height="24" fill="none"><path d="…"/></svg>
//!         │
//!         ▼
//! <symbol xmlns="…" xmlns:xlink="…" fill="none" viewBox="0 0 24 24" id="icon-arrow-app"><path d="…"/></symbol>
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

/// SVG namespace.
pub const XMLNS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace.
pub const XMLNS_LINK: &str = "http://www.w3.org/1999/xlink";

/// Root attributes that make no sense on a `<symbol>`.
const DROPPED_ATTRS: &[&[u8]] = &[b"width", b"height", b"x", b"y", b"id", b"version"];

#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    #[error("malformed svg: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("no root <svg> element")]
    MissingRoot,
}

/// Wrap `content` into a `<symbol id="{id}">` fragment.
pub fn wrap_as_symbol(id: &str, content: &str) -> Result<String, SymbolError> {
    let mut reader = Reader::from_str(content);

    loop {
        match reader.read_event()? {
            Event::Start(start) if is_svg(&start) => {
                let attrs = collect_attrs(&start)?;
                let name = start.name().as_ref().to_vec();
                let span = reader.read_to_end(QName(&name))?;
                let inner = &content[span.start as usize..span.end as usize];
                return Ok(render(id, &attrs, inner));
            }
            Event::Empty(start) if is_svg(&start) => {
                let attrs = collect_attrs(&start)?;
                return Ok(render(id, &attrs, ""));
            }
            Event::Start(_) | Event::Empty(_) => return Err(SymbolError::MissingRoot),
            Event::Eof => return Err(SymbolError::MissingRoot),
            // Prolog: declaration, doctype, comments, whitespace
            _ => {}
        }
    }
}

#[inline]
fn is_svg(start: &BytesStart<'_>) -> bool {
    start.local_name().as_ref() == b"svg"
}

/// Collect root attributes worth keeping, as raw (still escaped) text.
fn collect_attrs(start: &BytesStart<'_>) -> Result<Vec<(String, String)>, SymbolError> {
    let mut kept = Vec::new();
    let mut size = (None, None);

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = attr.key.as_ref();
        let value = String::from_utf8_lossy(&attr.value).into_owned();

        match key {
            b"width" => size.0 = parse_length(&value),
            b"height" => size.1 = parse_length(&value),
            _ => {}
        }

        // `xmlns` and `xmlns:xlink` are written by `render`; other prefixes
        // (inkscape, sketch, ...) stay bound for the children
        if DROPPED_ATTRS.contains(&key) || key == b"xmlns" || key == b"xmlns:xlink" {
            continue;
        }
        kept.push((String::from_utf8_lossy(key).into_owned(), value));
    }

    let has_viewbox = kept.iter().any(|(k, _)| k == "viewBox");
    if !has_viewbox && let (Some(w), Some(h)) = size {
        kept.push(("viewBox".to_string(), format!("0 0 {w} {h}")));
    }

    Ok(kept)
}

/// Parse a plain or `px` length into its numeric text.
fn parse_length(value: &str) -> Option<String> {
    let number = value.trim().trim_end_matches("px");
    number.parse::<f64>().ok().map(|_| number.to_string())
}

fn render(id: &str, attrs: &[(String, String)], inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 128);
    out.push_str(&format!(
        r#"<symbol xmlns="{XMLNS}" xmlns:xlink="{XMLNS_LINK}""#
    ));
    for (key, value) in attrs {
        // Raw values may contain the other quote kind
        if value.contains('"') {
            out.push_str(&format!(" {key}='{value}'"));
        } else {
            out.push_str(&format!(r#" {key}="{value}""#));
        }
    }
    out.push_str(&format!(r#" id="{id}">"#));
    out.push_str(inner);
    out.push_str("</symbol>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_viewbox_and_children() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"><path d="M0 0h24"/></svg>"#;
        let symbol = wrap_as_symbol("icon-a-app", svg).unwrap();

        assert!(symbol.starts_with("<symbol "));
        assert!(symbol.ends_with(r#"<path d="M0 0h24"/></symbol>"#));
        assert!(symbol.contains(r#"viewBox="0 0 24 24""#));
        assert!(symbol.contains(r#"fill="none""#));
        assert!(symbol.contains(r#"id="icon-a-app""#));
        assert!(!symbol.contains("width="));
        assert_eq!(symbol.matches("xmlns=").count(), 1);
    }

    #[test]
    fn test_wrap_derives_viewbox_from_size() {
        let svg = r#"<svg width="16px" height="12"><rect/></svg>"#;
        let symbol = wrap_as_symbol("x", svg).unwrap();
        assert!(symbol.contains(r#"viewBox="0 0 16 12""#));
    }

    #[test]
    fn test_wrap_skips_prolog() {
        let svg = "<?xml version=\"1.0\"?>\n<!-- exported -->\n<svg viewBox=\"0 0 1 1\"><g><g/></g></svg>\n";
        let symbol = wrap_as_symbol("x", svg).unwrap();
        assert!(symbol.contains("<g><g/></g></symbol>"));
    }

    #[test]
    fn test_wrap_empty_root() {
        let symbol = wrap_as_symbol("x", r#"<svg viewBox="0 0 1 1"/>"#).unwrap();
        assert!(symbol.ends_with(r#"id="x"></symbol>"#));
    }

    /// Every element and attribute prefix in `xml` resolves to a namespace.
    fn assert_prefixes_bound(xml: &str) {
        use quick_xml::NsReader;
        use quick_xml::name::ResolveResult;

        let mut reader = NsReader::from_str(xml);
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    let (ns, _) = reader.resolve_element(e.name());
                    assert!(!matches!(ns, ResolveResult::Unknown(_)), "{xml}");
                    for attr in e.attributes() {
                        let attr = attr.unwrap();
                        let (ns, _) = reader.resolve_attribute(attr.key);
                        assert!(!matches!(ns, ResolveResult::Unknown(_)), "{xml}");
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
    }

    #[test]
    fn test_wrap_keeps_editor_namespaces() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 1 1"><path inkscape:label="x" d="M0 0"/><use xlink:href="#a"/></svg>"##;
        let symbol = wrap_as_symbol("icon-ink-app", svg).unwrap();

        assert!(symbol.contains(r#"xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape""#));
        assert_eq!(symbol.matches("xmlns:xlink=").count(), 1);
        assert_prefixes_bound(&symbol);
    }

    #[test]
    fn test_wrap_rejects_non_svg() {
        assert!(matches!(
            wrap_as_symbol("x", "<html></html>"),
            Err(SymbolError::MissingRoot)
        ));
        assert!(matches!(wrap_as_symbol("x", ""), Err(SymbolError::MissingRoot)));
    }
}
