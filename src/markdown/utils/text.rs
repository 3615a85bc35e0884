use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::types::LineEnding;

lazy_static! {
    static ref IMAGE_REGEX: Regex = Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap();
    static ref REF_LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\[[^\]]*\]").unwrap();
    static ref CODE_REGEX: Regex = Regex::new(r"`+([^`]+?)`+").unwrap();
    static ref HTML_TAG_REGEX: Regex = Regex::new(r"</?[A-Za-z][^>]*>").unwrap();
    static ref BOLD_REGEX: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref BOLD_UNDERSCORE_REGEX: Regex = Regex::new(r"__(.+?)__").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref ITALIC_UNDERSCORE_REGEX: Regex = Regex::new(r"\b_(.+?)_\b").unwrap();
    static ref STRIKE_REGEX: Regex = Regex::new(r"~~(.+?)~~").unwrap();
    static ref LINE_BREAK_REGEX: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Strip inline markdown syntax from heading text, keeping what a reader sees.
///
/// Links and images collapse to their label, code spans to their content,
/// emphasis and strikethrough markers and inline HTML tags are dropped.
pub fn extract_text(text: &str) -> String {
    let text = IMAGE_REGEX.replace_all(text, "${1}");
    let text = LINK_REGEX.replace_all(&text, "${1}");
    let text = REF_LINK_REGEX.replace_all(&text, "${1}");
    let text = CODE_REGEX.replace_all(&text, "${1}");
    let text = HTML_TAG_REGEX.replace_all(&text, "");
    let text = BOLD_REGEX.replace_all(&text, "${1}");
    let text = BOLD_UNDERSCORE_REGEX.replace_all(&text, "${1}");
    let text = ITALIC_REGEX.replace_all(&text, "${1}");
    let text = ITALIC_UNDERSCORE_REGEX.replace_all(&text, "${1}");
    let text = STRIKE_REGEX.replace_all(&text, "${1}");

    text.trim().to_string()
}

/// Replace every line break (`\r\n`, `\r` or `\n`) with the given terminator
pub fn normalize_line_endings(text: &str, eol: LineEnding) -> String {
    LINE_BREAK_REGEX.replace_all(text, eol.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_strips_inline_syntax() {
        assert_eq!(extract_text("Use **bold** and *italic*"), "Use bold and italic");
        assert_eq!(extract_text("See [the docs](https://example.com)"), "See the docs");
        assert_eq!(extract_text("The `run()` method"), "The run() method");
        assert_eq!(extract_text("![logo](logo.png) Project"), "logo Project");
        assert_eq!(extract_text("~~Old~~ New"), "Old New");
        assert_eq!(extract_text("Title <sup>beta</sup>"), "Title beta");
    }

    #[test]
    fn test_extract_text_keeps_snake_case() {
        assert_eq!(extract_text("the snake_case_name field"), "the snake_case_name field");
        assert_eq!(extract_text("an _emphasised_ word"), "an emphasised word");
    }

    #[test]
    fn test_extract_text_keeps_comparisons() {
        assert_eq!(extract_text("a < b > c"), "a < b > c");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\nc\rd", LineEnding::Lf), "a\nb\nc\nd");
        assert_eq!(normalize_line_endings("a\nb", LineEnding::CrLf), "a\r\nb");
        assert_eq!(normalize_line_endings("a\r\nb", LineEnding::CrLf), "a\r\nb");
    }
}
