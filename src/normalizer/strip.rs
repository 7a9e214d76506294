//! Candidate clean-up.

/// Whitespace as ECMAScript `\s` and `String.prototype.trim` see it:
/// Unicode `White_Space` without NEL (U+0085), plus the BOM (U+FEFF).
pub(crate) fn is_reply_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{feff}'
}

/// True for characters that decorate a candidate rather than belong to it.
fn is_decoration(c: char) -> bool {
    is_reply_whitespace(c) || matches!(c, '"' | '\'' | '[' | ']' | '{' | '}' | '(' | ')')
}

/// Remove surrounding whitespace, quotes and brackets from a candidate.
///
/// Only leading and trailing runs are touched; interior characters are kept.
pub fn strip_decorations(candidate: &str) -> &str {
    candidate.trim_matches(is_decoration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_brackets_and_whitespace() {
        assert_eq!(strip_decorations("  [A]  "), "A");
        assert_eq!(strip_decorations("{(\"B\")}"), "B");
        assert_eq!(strip_decorations("\t'C'\n"), "C");
    }

    #[test]
    fn test_keeps_interior_characters() {
        assert_eq!(strip_decorations("\"a (b) c\""), "a (b) c");
        assert_eq!(strip_decorations("[it's]"), "it's");
    }

    #[test]
    fn test_decoration_only_becomes_empty() {
        assert_eq!(strip_decorations("''"), "");
        assert_eq!(strip_decorations(" [ ] "), "");
        assert_eq!(strip_decorations(""), "");
    }

    #[test]
    fn test_clean_string_is_unchanged() {
        assert_eq!(strip_decorations("배송비는 3만원 이상 무료입니다"), "배송비는 3만원 이상 무료입니다");
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(strip_decorations("\u{3000}렌즈\u{00a0}"), "렌즈");
        assert_eq!(strip_decorations("\u{2028}[A]\u{2029}"), "A");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(strip_decorations("\u{feff}A"), "A");
        assert_eq!(strip_decorations("[\u{feff}B\u{feff}]"), "B");
    }

    #[test]
    fn test_next_line_is_kept() {
        assert_eq!(strip_decorations("A\u{0085}"), "A\u{0085}");
        assert_eq!(strip_decorations("\u{0085}"), "\u{0085}");
    }
}
