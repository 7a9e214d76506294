//! Sentence splitting for provider replies.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline, or a period followed by a space.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n|\. ").expect("Invalid sentence boundary regex"));

/// Split completion text into trimmed, non-empty segments.
///
/// The boundary rule is purely lexical, so abbreviations and decimals with
/// a following space are split too.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_period_space_and_newline() {
        assert_eq!(
            split_sentences("1~2일 내 배송됩니다. 배송비는 3만원 이상 무료입니다.\n문의 주세요"),
            vec![
                "1~2일 내 배송됩니다",
                "배송비는 3만원 이상 무료입니다.",
                "문의 주세요"
            ]
        );
    }

    #[test]
    fn test_drops_blank_segments() {
        assert_eq!(split_sentences("A\n\n  \nB"), vec!["A", "B"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n ").is_empty());
    }

    #[test]
    fn test_final_period_is_kept() {
        assert_eq!(split_sentences("Only one."), vec!["Only one."]);
    }

    #[test]
    fn test_lexical_rule_splits_abbreviations() {
        assert_eq!(split_sentences("Dr. Kim is in"), vec!["Dr", "Kim is in"]);
        assert_eq!(split_sentences("Power 1.5 lens"), vec!["Power 1.5 lens"]);
        assert_eq!(split_sentences("Version 2. 0"), vec!["Version 2", "0"]);
    }

    #[test]
    fn test_carriage_returns_are_trimmed() {
        assert_eq!(split_sentences("A\r\nB"), vec!["A", "B"]);
    }
}
