//! Quote-delimited run scanner.
//!
//! Finds substrings that open with `'` or `"` and close at the next
//! unescaped occurrence of the same quote character. A backslash escapes
//! whatever character follows it. Runs never span a line break, and a run
//! left open at end of input is abandoned, after which scanning resumes at
//! the character right after the abandoned opening quote.
//!
//! Yielded runs include their delimiters and keep escapes verbatim.

/// Iterator over the quoted runs of a string, left to right.
#[derive(Debug, Clone)]
pub struct QuotedRuns<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> QuotedRuns<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for QuotedRuns<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(open) = self.input[self.pos..].chars().next() {
            let start = self.pos;
            self.pos += open.len_utf8();

            if !is_quote(open) {
                continue;
            }

            if let Some(len) = closing_offset(&self.input[self.pos..], open) {
                self.pos += len;
                return Some(&self.input[start..self.pos]);
            }
        }
        None
    }
}

/// Collect every quoted run in `input`.
pub fn quoted_runs(input: &str) -> Vec<&str> {
    QuotedRuns::new(input).collect()
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Byte length of the run body up to and including the closing quote, or
/// `None` when the run cannot be closed.
fn closing_offset(body: &str, quote: char) -> Option<usize> {
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Some(i + c.len_utf8());
        }
        if is_line_terminator(c) {
            return None;
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) if !is_line_terminator(escaped) => {}
                _ => return None,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_and_single_quotes() {
        assert_eq!(quoted_runs(r#""A", 'B'"#), vec![r#""A""#, "'B'"]);
    }

    #[test]
    fn test_no_quotes() {
        assert!(quoted_runs("just a sentence.").is_empty());
        assert!(quoted_runs("").is_empty());
    }

    #[test]
    fn test_other_quote_kind_is_content() {
        assert_eq!(quoted_runs(r#""it's fine""#), vec![r#""it's fine""#]);
        assert_eq!(quoted_runs(r#"'say "hi"'"#), vec![r#"'say "hi"'"#]);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(quoted_runs(r#""a\"b" rest"#), vec![r#""a\"b""#]);
    }

    #[test]
    fn test_escaped_backslash_before_close() {
        assert_eq!(quoted_runs(r#""a\\" "b""#), vec![r#""a\\""#, r#""b""#]);
    }

    #[test]
    fn test_unterminated_run_is_dropped() {
        assert!(quoted_runs(r#""open ended"#).is_empty());
        assert!(quoted_runs(r#""trailing escape\"#).is_empty());
    }

    #[test]
    fn test_scan_resumes_after_abandoned_quote() {
        // The first quote never closes on its line; the next quote opens a run.
        assert_eq!(quoted_runs("\"abc\n\"def\""), vec!["\"def\""]);
        // An apostrophe that never closes hands off to the real run.
        assert_eq!(quoted_runs(r#"don't "stop""#), vec![r#""stop""#]);
    }

    #[test]
    fn test_line_break_aborts_run() {
        assert!(quoted_runs("\"a\nb\"").is_empty());
        assert!(quoted_runs("\"a\\\nb\"").is_empty());
        assert!(quoted_runs("'a\r\nb'").is_empty());
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(quoted_runs("'' \"\""), vec!["''", "\"\""]);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(
            quoted_runs(r#"["1~2일 내 배송됩니다", '무료 👓']"#),
            vec![r#""1~2일 내 배송됩니다""#, "'무료 👓'"]
        );
    }

    #[test]
    fn test_adjacent_runs_share_no_delimiter() {
        assert_eq!(quoted_runs(r#""a""b""#), vec![r#""a""#, r#""b""#]);
    }
}
