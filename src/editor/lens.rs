use crate::config::TocConfig;
use crate::document::{DocumentSource, TocRange};
use crate::markdown::utils::text::normalize_line_endings;

use super::controller::{detect_toc_ranges, is_markdown};

pub const UP_TO_DATE_LABEL: &str = "Table of Contents (up to date)";
pub const OUT_OF_DATE_LABEL: &str = "Table of Contents (out of date)";

/// Status annotation attached to a detected TOC block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLens {
    pub range: TocRange,
    pub label: &'static str,
    pub up_to_date: bool,
}

/// One lens per TOC block in the document
pub fn toc_lenses<D: DocumentSource + ?Sized>(doc: &D, config: &TocConfig) -> Vec<TocLens> {
    if !is_markdown(doc) {
        return Vec::new();
    }

    let (ranges, canonical) = detect_toc_ranges(doc, config);
    let eol = doc.line_ending();

    ranges
        .into_iter()
        .map(|range| {
            let up_to_date = normalize_line_endings(doc.text_in(range), eol) == canonical;
            TocLens {
                range,
                label: if up_to_date { UP_TO_DATE_LABEL } else { OUT_OF_DATE_LABEL },
                up_to_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Position, TextDocument, MARKDOWN_LANGUAGE_ID};

    #[test]
    fn test_lenses_report_freshness() {
        let text = "# A\n\n- [A](#a)\n  - [B](#b)\n\n## B\n\n## C\n\n- [A](#a)\n  - [B](#b)\n  - [C](#c)\n";
        let doc = TextDocument::new(text, MARKDOWN_LANGUAGE_ID);
        let lenses = toc_lenses(&doc, &TocConfig::default());

        assert_eq!(lenses.len(), 2);
        assert_eq!(lenses[0].label, OUT_OF_DATE_LABEL);
        assert!(!lenses[0].up_to_date);
        assert_eq!(lenses[0].range.start, Position::new(2, 0));
        assert_eq!(lenses[1].label, UP_TO_DATE_LABEL);
        assert!(lenses[1].up_to_date);
    }

    #[test]
    fn test_no_lenses_outside_markdown() {
        let doc = TextDocument::new("# A\n\n- [A](#a)\n", "plaintext");
        assert!(toc_lenses(&doc, &TocConfig::default()).is_empty());
    }
}
