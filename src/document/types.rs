use std::fmt;

/// A position in a document: 0-based line and byte column within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Half-open span between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A TOC block in document coordinates
pub type TocRange = Range;

/// Indentation preference of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indentation {
    Tabs,
    Spaces(usize),
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation::Spaces(4)
    }
}

/// One operation of an edit batch, expressed in pre-edit coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Delete(Range),
    Insert(Position, String),
    Replace(Range, String),
}

impl TextEdit {
    /// Range of existing text touched by the edit
    pub fn range(&self) -> Range {
        match self {
            TextEdit::Delete(range) | TextEdit::Replace(range, _) => *range,
            TextEdit::Insert(position, _) => Range::new(*position, *position),
        }
    }

    /// Text written by the edit
    pub fn new_text(&self) -> &str {
        match self {
            TextEdit::Delete(_) => "",
            TextEdit::Insert(_, text) | TextEdit::Replace(_, text) => text,
        }
    }
}
