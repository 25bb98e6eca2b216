//! Stroke color normalization.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static STROKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"stroke="[a-zA-Z#0-9]*""#).unwrap());

/// Replace the first `stroke="<color>"` attribute with `stroke="currentColor"`.
///
/// Only the first match is rewritten, so icons can still carry a second,
/// fixed accent stroke.
pub fn replace_first_stroke(content: &str) -> Cow<'_, str> {
    STROKE_RE.replace(content, r#"stroke="currentColor""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_stroke_replaced() {
        let svg = r##"<svg><path stroke="#333"/><path stroke="red"/></svg>"##;
        assert_eq!(
            replace_first_stroke(svg),
            r##"<svg><path stroke="currentColor"/><path stroke="red"/></svg>"##
        );
    }

    #[test]
    fn test_no_stroke_is_borrowed() {
        let svg = r#"<svg><path fill="red"/></svg>"#;
        assert!(matches!(replace_first_stroke(svg), Cow::Borrowed(_)));
    }

    #[test]
    fn test_stroke_width_untouched() {
        let svg = r#"<svg><path stroke-width="2" stroke="blue"/></svg>"#;
        assert_eq!(
            replace_first_stroke(svg),
            r#"<svg><path stroke-width="2" stroke="currentColor"/></svg>"#
        );
    }
}
