//! ANSI escape sequence stripping
//!
//! Module logs captured from terminals often carry color codes. The cascade
//! operates on plain text, so escapes are removed up front; modcon applies its
//! own per-level styling at render time.

use ansi_parser::{AnsiParser, Output};
use std::borrow::Cow;

/// Remove all ANSI escape sequences from a line, keeping only the text.
///
/// Lines without an escape byte are passed through unchanged.
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    if !line.contains('\u{1b}') {
        return Cow::Borrowed(line);
    }

    let plain: String = line
        .ansi_parse()
        .filter_map(|output| match output {
            Output::TextBlock(text) => Some(text),
            Output::Escape(_) => None,
        })
        .collect();

    Cow::Owned(plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_borrowed() {
        let line = "2024-01-01 12:00:00 [INFO] plain";
        assert!(matches!(strip_ansi(line), Cow::Borrowed(_)));
    }

    #[test]
    fn test_color_codes_removed() {
        let line = "\u{1b}[31mERROR\u{1b}[0m something failed";
        assert_eq!(strip_ansi(line), "ERROR something failed");
    }

    #[test]
    fn test_nested_styles_removed() {
        let line = "\u{1b}[1m\u{1b}[33mWARN\u{1b}[0m slow query\u{1b}[0m";
        assert_eq!(strip_ansi(line), "WARN slow query");
    }
}
