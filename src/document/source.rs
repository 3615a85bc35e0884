use crate::document::types::{Indentation, Position, Range, TextEdit};
use crate::markdown::types::LineEnding;
use crate::utils::error::BoxResult;

/// Read access to a document, as provided by the host editor
pub trait DocumentSource {
    /// Full document text
    fn text(&self) -> &str;

    /// Kind of document, e.g. `markdown`
    fn language_id(&self) -> &str;

    fn line_count(&self) -> usize;

    /// Text of a line without its terminator
    fn line_at(&self, line: usize) -> Option<&str>;

    /// Convert a byte offset into a position, clamped to the document
    fn position_at(&self, offset: usize) -> Position;

    /// Convert a position into a byte offset, clamped to the document
    fn offset_at(&self, position: Position) -> usize;

    fn line_ending(&self) -> LineEnding;

    fn indentation(&self) -> Indentation;

    /// Text covered by a range
    fn text_in(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end).max(start);
        self.text().get(start..end).unwrap_or("")
    }
}

/// Write access to a document.
///
/// A batch is applied as a unit: either every edit lands or the document is
/// left untouched and an error is returned.
pub trait EditSink {
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> BoxResult<()>;
}
