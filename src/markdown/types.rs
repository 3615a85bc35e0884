use serde::{Deserialize, Serialize};

/// One heading line of a document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Number of leading `#` characters (1 for `#`, 2 for `##`, ...)
    pub level: usize,
    /// Raw heading text, closing `#` run and surrounding whitespace removed
    pub text: String,
}

impl HeadingEntry {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Line terminator style of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Detect the style from the first line break in `text`, `Lf` if there is none
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// Formatting of the target document; only affects rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFormatting {
    /// One level of list indentation (spaces or a single tab)
    pub indent_unit: String,
    pub line_terminator: LineEnding,
}

impl Default for DocFormatting {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            line_terminator: LineEnding::Lf,
        }
    }
}
