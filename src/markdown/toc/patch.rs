use crate::markdown::types::LineEnding;
use crate::markdown::utils::similarity::common_prefix_len;
use crate::markdown::utils::text::normalize_line_endings;

/// Minimal edit turning an existing TOC block into the canonical TOC.
///
/// Offsets are byte offsets into the document the block was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocPatch {
    Insert { offset: usize, text: String },
    Replace { start: usize, end: usize, text: String },
}

/// Compute the patch for the block at `block_start` holding `old_text`.
///
/// Returns `None` when the block already matches `canonical` once its line
/// endings are normalised to `eol`. Only the text after the longest common
/// prefix is rewritten.
pub fn compute_patch(block_start: usize, old_text: &str, canonical: &str, eol: LineEnding) -> Option<TocPatch> {
    let normalized = normalize_line_endings(old_text, eol);
    if normalized == canonical {
        return None;
    }

    let unchanged = common_prefix_len(&normalized, canonical);
    let (raw_unchanged, unchanged) = raw_offset(old_text, unchanged, eol);
    let start = block_start + raw_unchanged;
    let end = block_start + old_text.len();
    let text = canonical[unchanged..].to_string();

    if start == end {
        Some(TocPatch::Insert { offset: start, text })
    } else {
        Some(TocPatch::Replace { start, end, text })
    }
}

/// Map an offset in the normalised text back to the raw text it came from.
///
/// An offset falling inside a normalised line break snaps back to the start
/// of that break. Returns the raw offset and the normalised offset it maps to.
fn raw_offset(raw: &str, normalized_offset: usize, eol: LineEnding) -> (usize, usize) {
    let bytes = raw.as_bytes();
    let eol_len = eol.as_str().len();
    let mut raw_idx = 0;
    let mut norm_idx = 0;

    while raw_idx < bytes.len() && norm_idx < normalized_offset {
        let break_len = match bytes[raw_idx] {
            b'\r' if bytes.get(raw_idx + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => 0,
        };

        if break_len == 0 {
            raw_idx += 1;
            norm_idx += 1;
        } else if norm_idx + eol_len <= normalized_offset {
            raw_idx += break_len;
            norm_idx += eol_len;
        } else {
            break;
        }
    }

    (raw_idx, norm_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_toc_needs_no_patch() {
        let toc = "- [A](#a)\n- [B](#b)";
        assert_eq!(compute_patch(10, toc, toc, LineEnding::Lf), None);
    }

    #[test]
    fn test_only_the_differing_suffix_is_replaced() {
        let old = "- [A](#a)\n- [B](#b)";
        let new = "- [A](#a)\n- [C](#c)";
        let patch = compute_patch(100, old, new, LineEnding::Lf).unwrap();

        let prefix = "- [A](#a)\n- [";
        assert_eq!(
            patch,
            TocPatch::Replace {
                start: 100 + prefix.len(),
                end: 100 + old.len(),
                text: "C](#c)".to_string(),
            }
        );
    }

    #[test]
    fn test_appended_entry_is_an_insertion() {
        let old = "- [A](#a)";
        let new = "- [A](#a)\n- [B](#b)";
        let patch = compute_patch(0, old, new, LineEnding::Lf).unwrap();
        assert_eq!(
            patch,
            TocPatch::Insert {
                offset: old.len(),
                text: "\n- [B](#b)".to_string(),
            }
        );
    }

    #[test]
    fn test_removed_entry_replaces_with_empty_text() {
        let old = "- [A](#a)\n- [B](#b)";
        let new = "- [A](#a)";
        let patch = compute_patch(0, old, new, LineEnding::Lf).unwrap();
        assert_eq!(
            patch,
            TocPatch::Replace {
                start: 9,
                end: old.len(),
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_line_endings_are_normalised_before_comparing() {
        let old = "- [A](#a)\n- [B](#b)";
        let new = "- [A](#a)\r\n- [B](#b)";
        let patch = compute_patch(0, old, new, LineEnding::CrLf);
        assert_eq!(patch, None);
    }

    #[test]
    fn test_mixed_line_endings_map_back_to_raw_offsets() {
        // raw text uses LF, document style is CRLF
        let old = "- [A](#a)\n- [B](#b)";
        let new = "- [A](#a)\r\n- [C](#c)";
        let patch = compute_patch(0, old, new, LineEnding::CrLf).unwrap();
        assert_eq!(
            patch,
            TocPatch::Replace {
                start: "- [A](#a)\n- [".len(),
                end: old.len(),
                text: "C](#c)".to_string(),
            }
        );
    }

    #[test]
    fn test_raw_offset_snaps_to_line_break_start() {
        assert_eq!(raw_offset("ab\ncd", 3, LineEnding::CrLf), (2, 2));
        assert_eq!(raw_offset("ab\ncd", 4, LineEnding::CrLf), (3, 4));
        assert_eq!(raw_offset("ab\r\ncd", 3, LineEnding::Lf), (4, 3));
    }
}
