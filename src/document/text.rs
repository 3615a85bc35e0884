use std::path::Path;

use log::debug;

use crate::document::source::{DocumentSource, EditSink};
use crate::document::types::{Indentation, Position, TextEdit};
use crate::markdown::types::LineEnding;
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs::has_extension;

/// Language id of markdown documents
pub const MARKDOWN_LANGUAGE_ID: &str = "markdown";

/// Language id of everything else
pub const PLAINTEXT_LANGUAGE_ID: &str = "plaintext";

/// Pick a language id from a file extension
pub fn language_for_path<P: AsRef<Path>>(path: P, markdown_extensions: &[String]) -> &'static str {
    if has_extension(path, markdown_extensions) {
        MARKDOWN_LANGUAGE_ID
    } else {
        PLAINTEXT_LANGUAGE_ID
    }
}

/// In-memory document
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    language_id: String,
    indentation: Indentation,
    line_starts: Vec<usize>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>, language_id: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            language_id: language_id.into(),
            indentation: Indentation::default(),
            line_starts,
        }
    }

    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    /// Byte range of a line's content, terminator excluded
    fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let next = self.line_starts.get(line + 1).copied().unwrap_or(self.text.len());
        let content = &self.text[start..next];
        let content = content.strip_suffix('\n').unwrap_or(content);
        let content = content.strip_suffix('\r').unwrap_or(content);
        Some((start, start + content.len()))
    }

    /// Offset of a position, or `None` when it lies outside the document
    fn checked_offset_at(&self, position: Position) -> Option<usize> {
        let (start, end) = self.line_bounds(position.line)?;
        let offset = start.checked_add(position.character)?;
        if offset <= end && self.text.is_char_boundary(offset) {
            Some(offset)
        } else {
            None
        }
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(text.match_indices('\n').map(|(idx, _)| idx + 1));
    starts
}

impl DocumentSource for TextDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_at(&self, line: usize) -> Option<&str> {
        self.line_bounds(line).map(|(start, end)| &self.text[start..end])
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    fn offset_at(&self, position: Position) -> usize {
        match self.line_bounds(position.line) {
            Some((start, end)) => (start + position.character).min(end),
            None => self.text.len(),
        }
    }

    fn line_ending(&self) -> LineEnding {
        LineEnding::detect(&self.text)
    }

    fn indentation(&self) -> Indentation {
        self.indentation
    }
}

impl EditSink for TextDocument {
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> BoxResult<()> {
        let mut resolved = Vec::with_capacity(edits.len());
        for edit in &edits {
            let range = edit.range();
            let start = self.checked_offset_at(range.start).ok_or_else(|| {
                MdtocError::Edit(format!("position {} is outside the document", range.start))
            })?;
            let end = self.checked_offset_at(range.end).ok_or_else(|| {
                MdtocError::Edit(format!("position {} is outside the document", range.end))
            })?;
            if start > end {
                return Err(MdtocError::Edit(format!("range {}..{} is inverted", range.start, range.end)).into());
            }
            resolved.push((start, end, edit.new_text()));
        }

        // Stable sort keeps inserts at the same offset in submission order
        resolved.sort_by_key(|&(start, end, _)| (start, end));
        for pair in resolved.windows(2) {
            if pair[0].1 > pair[1].0 {
                return Err(MdtocError::Edit("edits in one batch overlap".to_string()).into());
            }
        }

        let mut output = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for (start, end, new_text) in resolved {
            output.push_str(&self.text[cursor..start]);
            output.push_str(new_text);
            cursor = end;
        }
        output.push_str(&self.text[cursor..]);

        debug!("Applied {} edit(s)", edits.len());
        self.line_starts = compute_line_starts(&output);
        self.text = output;
        Ok(())
    }
}
