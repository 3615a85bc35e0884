pub mod source;
pub mod text;
pub mod types;

pub use source::{DocumentSource, EditSink};
pub use text::{language_for_path, TextDocument, MARKDOWN_LANGUAGE_ID};
pub use types::{Indentation, Position, Range, TextEdit, TocRange};
