use log::debug;

use crate::config::TocConfig;
use crate::document::{
    DocumentSource, EditSink, Indentation, Position, Range, TextEdit, TocRange, MARKDOWN_LANGUAGE_ID,
};
use crate::markdown::toc::{build_toc, compute_patch, detect_toc_blocks, generate_toc, TocPatch};
use crate::markdown::types::DocFormatting;
use crate::utils::error::BoxResult;

/// Whether TOC commands apply to this document
pub fn is_markdown<D: DocumentSource + ?Sized>(doc: &D) -> bool {
    doc.language_id() == MARKDOWN_LANGUAGE_ID
}

/// Rendering format derived from the document and configuration
pub fn doc_formatting<D: DocumentSource + ?Sized>(doc: &D, config: &TocConfig) -> DocFormatting {
    let indent_unit = if config.adaptive_indentation {
        // Nested items line up with the text after the parent's marker
        let marker_width = if config.ordered_list {
            "1.".len()
        } else {
            config.list_marker.chars().count()
        };
        " ".repeat(marker_width + 1)
    } else {
        match doc.indentation() {
            Indentation::Tabs => "\t".to_string(),
            Indentation::Spaces(size) => " ".repeat(size),
        }
    };

    DocFormatting {
        indent_unit,
        line_terminator: doc.line_ending(),
    }
}

/// Canonical TOC text for the document's current headings
pub fn generate_toc_text<D: DocumentSource + ?Sized>(doc: &D, config: &TocConfig) -> String {
    let headings = build_toc(doc.text());
    generate_toc(&headings, config, &doc_formatting(doc, config))
}

/// Ranges of the TOC blocks already in the document, with the canonical TOC text
pub fn detect_toc_ranges<D: DocumentSource + ?Sized>(doc: &D, config: &TocConfig) -> (Vec<TocRange>, String) {
    let canonical = generate_toc_text(doc, config);
    let ranges = detect_toc_blocks(doc.text(), &canonical, config)
        .into_iter()
        .map(|block| Range::new(doc.position_at(block.start), doc.position_at(block.end)))
        .collect();

    (ranges, canonical)
}

/// Insert a TOC at `cursor`.
///
/// Returns `false` without touching anything when there is no markdown
/// document or the document has no headings.
pub fn create_toc<D: DocumentSource + EditSink>(
    doc: Option<&mut D>,
    cursor: Position,
    config: &TocConfig,
) -> BoxResult<bool> {
    let doc = match doc {
        Some(doc) if is_markdown(doc) => doc,
        _ => {
            debug!("No markdown document, nothing to create");
            return Ok(false);
        }
    };

    let toc = generate_toc_text(doc, config);
    if toc.is_empty() {
        debug!("Document has no headings, nothing to create");
        return Ok(false);
    }

    doc.apply_edits(vec![TextEdit::Insert(cursor, toc)])?;
    Ok(true)
}

/// Bring every TOC in the document up to date.
///
/// All patches go out as one batch. Returns the number of edits applied,
/// 0 when every TOC was already current.
pub fn update_toc<D: DocumentSource + EditSink>(doc: Option<&mut D>, config: &TocConfig) -> BoxResult<usize> {
    let doc = match doc {
        Some(doc) if is_markdown(doc) => doc,
        _ => {
            debug!("No markdown document, nothing to update");
            return Ok(0);
        }
    };

    let edits = compute_update_edits(doc, config);
    if edits.is_empty() {
        debug!("Table of contents is up to date");
        return Ok(0);
    }

    let count = edits.len();
    doc.apply_edits(edits)?;
    debug!("Updated table of contents with {} edit(s)", count);
    Ok(count)
}

/// Before-save hook: update TOCs when update-on-save is enabled
pub fn on_will_save<D: DocumentSource + EditSink>(doc: Option<&mut D>, config: &TocConfig) -> BoxResult<usize> {
    if !config.update_on_save {
        return Ok(0);
    }
    update_toc(doc, config)
}

/// Edits that would bring every detected TOC up to date
pub fn compute_update_edits<D: DocumentSource + ?Sized>(doc: &D, config: &TocConfig) -> Vec<TextEdit> {
    let (ranges, canonical) = detect_toc_ranges(doc, config);
    let eol = doc.line_ending();

    ranges
        .into_iter()
        .filter_map(|range| {
            let start = doc.offset_at(range.start);
            compute_patch(start, doc.text_in(range), &canonical, eol)
        })
        .map(|patch| match patch {
            TocPatch::Insert { offset, text } => TextEdit::Insert(doc.position_at(offset), text),
            TocPatch::Replace { start, end, text } => {
                let range = Range::new(doc.position_at(start), doc.position_at(end));
                if text.is_empty() {
                    TextEdit::Delete(range)
                } else {
                    TextEdit::Replace(range, text)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    const DOC: &str = "# Project\n\n- [Project](#project)\n  - [Install](#install)\n\n## Install\n\n## Usage\n";

    fn markdown(text: &str) -> TextDocument {
        TextDocument::new(text, MARKDOWN_LANGUAGE_ID)
    }

    #[test]
    fn test_generate_toc_text() {
        let doc = markdown(DOC);
        assert_eq!(
            generate_toc_text(&doc, &TocConfig::default()),
            "- [Project](#project)\n  - [Install](#install)\n  - [Usage](#usage)"
        );
    }

    #[test]
    fn test_doc_formatting() {
        let doc = markdown("a\r\nb").with_indentation(Indentation::Tabs);
        let mut config = TocConfig::default();
        let formatting = doc_formatting(&doc, &config);
        assert_eq!(formatting.indent_unit, "  ");
        assert_eq!(formatting.line_terminator.as_str(), "\r\n");

        config.ordered_list = true;
        assert_eq!(doc_formatting(&doc, &config).indent_unit, "   ");

        config.adaptive_indentation = false;
        assert_eq!(doc_formatting(&doc, &config).indent_unit, "\t");

        let doc = markdown("a").with_indentation(Indentation::Spaces(2));
        assert_eq!(doc_formatting(&doc, &config).indent_unit, "  ");
    }

    #[test]
    fn test_detect_toc_ranges() {
        let doc = markdown(DOC);
        let (ranges, canonical) = detect_toc_ranges(&doc, &TocConfig::default());
        assert!(canonical.ends_with("[Usage](#usage)"));
        assert_eq!(ranges, vec![Range::new(Position::new(2, 0), Position::new(3, 23))]);
    }

    #[test]
    fn test_update_patches_only_the_tail() {
        let mut doc = markdown(DOC);
        let edits = compute_update_edits(&doc, &TocConfig::default());
        assert_eq!(
            edits,
            vec![TextEdit::Insert(Position::new(3, 23), "\n  - [Usage](#usage)".to_string())]
        );

        assert_eq!(update_toc(Some(&mut doc), &TocConfig::default()).unwrap(), 1);
        assert!(doc.text().contains("  - [Install](#install)\n  - [Usage](#usage)\n\n## Install"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut doc = markdown(DOC);
        let config = TocConfig::default();
        update_toc(Some(&mut doc), &config).unwrap();
        let once = doc.text().to_string();

        assert_eq!(update_toc(Some(&mut doc), &config).unwrap(), 0);
        assert_eq!(doc.text(), once);
    }

    #[test]
    fn test_update_handles_several_tocs_in_one_batch() {
        let text = "# A\n\n- [A](#a)\n\n## B\n\n- [A](#a)\n";
        let mut doc = markdown(text);
        assert_eq!(update_toc(Some(&mut doc), &TocConfig::default()).unwrap(), 2);
        assert_eq!(doc.text(), "# A\n\n- [A](#a)\n  - [B](#b)\n\n## B\n\n- [A](#a)\n  - [B](#b)\n");
    }

    #[test]
    fn test_update_removes_deleted_heading() {
        let text = "- [A](#a)\n- [B](#b)\n\n# A\n";
        let mut doc = markdown(text);
        assert_eq!(update_toc(Some(&mut doc), &TocConfig::default()).unwrap(), 1);
        assert_eq!(doc.text(), "- [A](#a)\n\n# A\n");
    }

    #[test]
    fn test_update_keeps_crlf() {
        let text = "# A\r\n\r\n- [A](#a)\r\n\r\n## B\r\n";
        let mut doc = markdown(text);
        update_toc(Some(&mut doc), &TocConfig::default()).unwrap();
        assert_eq!(doc.text(), "# A\r\n\r\n- [A](#a)\r\n  - [B](#b)\r\n\r\n## B\r\n");
    }

    #[test]
    fn test_no_toc_list_is_left_alone() {
        let text = "# A\n\n<!-- no toc -->\n- [A](#a)\n\n## B\n";
        let mut doc = markdown(text);
        assert_eq!(update_toc(Some(&mut doc), &TocConfig::default()).unwrap(), 0);
        assert_eq!(doc.text(), text);
    }

    #[test]
    fn test_create_inserts_at_cursor() {
        let mut doc = markdown("# Title\n\n\n## Part\n");
        let created = create_toc(Some(&mut doc), Position::new(2, 0), &TocConfig::default()).unwrap();
        assert!(created);
        assert_eq!(doc.text(), "# Title\n\n- [Title](#title)\n  - [Part](#part)\n## Part\n");
    }

    #[test]
    fn test_create_then_update_is_a_no_op() {
        let mut doc = markdown("# Title\n\n\n\n## Part\n");
        let config = TocConfig::default();
        create_toc(Some(&mut doc), Position::new(2, 0), &config).unwrap();
        assert!(compute_update_edits(&doc, &config).is_empty());
    }

    #[test]
    fn test_commands_skip_missing_or_foreign_documents() {
        let config = TocConfig::default();
        assert!(!create_toc::<TextDocument>(None, Position::default(), &config).unwrap());
        assert_eq!(update_toc::<TextDocument>(None, &config).unwrap(), 0);

        let mut doc = TextDocument::new("# Title\n- [Old](#old)\n", "plaintext");
        assert!(!create_toc(Some(&mut doc), Position::default(), &config).unwrap());
        assert_eq!(update_toc(Some(&mut doc), &config).unwrap(), 0);
        assert_eq!(doc.text(), "# Title\n- [Old](#old)\n");
    }

    #[test]
    fn test_create_without_headings_does_nothing() {
        let mut doc = markdown("no headings here\n");
        assert!(!create_toc(Some(&mut doc), Position::default(), &TocConfig::default()).unwrap());
        assert_eq!(doc.text(), "no headings here\n");
    }

    #[test]
    fn test_will_save_respects_update_on_save() {
        let text = "# A\n\n- [A](#a)\n\n## B\n";
        let mut config = TocConfig::default();
        config.update_on_save = false;

        let mut doc = markdown(text);
        assert_eq!(on_will_save(Some(&mut doc), &config).unwrap(), 0);
        assert_eq!(doc.text(), text);

        config.update_on_save = true;
        assert_eq!(on_will_save(Some(&mut doc), &config).unwrap(), 1);
        assert_ne!(doc.text(), text);
    }
}
