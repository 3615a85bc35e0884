use crate::config::types::{IndentationMode, OrderedListMarker};

/// Default heading depth range
pub fn default_levels() -> String {
    "1..6".to_string()
}

/// Default ordered list flag
pub fn default_ordered_list() -> bool {
    false
}

/// Default bullet for unordered lists
pub fn default_unordered_list_marker() -> String {
    "-".to_string()
}

/// Default numbering style for ordered lists
pub fn default_ordered_list_marker() -> OrderedListMarker {
    OrderedListMarker::Ordered
}

/// Default plaintext flag (links are rendered)
pub fn default_plaintext() -> bool {
    false
}

/// Default update-on-save flag
pub fn default_update_on_save() -> bool {
    true
}

/// Default list indentation mode
pub fn default_indentation() -> IndentationMode {
    IndentationMode::Adaptive
}

/// Default editor tab size
pub fn default_tab_size() -> usize {
    4
}

/// Default to spaces rather than tabs
pub fn default_insert_spaces() -> bool {
    true
}

/// File extensions recognised as markdown documents
pub fn default_markdown_extensions() -> Vec<String> {
    vec![
        "md".to_string(),
        "markdown".to_string(),
        "mdown".to_string(),
        "mkd".to_string(),
        "mkdn".to_string(),
    ]
}
