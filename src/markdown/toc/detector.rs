use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::TocConfig;
use crate::markdown::types::LineEnding;
use crate::markdown::utils::similarity::{dice_similarity, prefix_ratio};
use crate::markdown::utils::text::normalize_line_endings;

/// A list block on the line before this phrase is never treated as a TOC
pub const NO_TOC_MARKER: &str = "no toc";

/// Candidates scoring above this are accepted
pub const SCORE_THRESHOLD: f64 = 0.5;

lazy_static! {
    static ref LIST_BLOCK_REGEX: Regex = Regex::new(
        r"(?m)^(?:[-+*]|[0-9]+[.)]) [^\r\n]*(?:\r?\n[ \t]*(?:[-+*]|[0-9]+[.)]) [^\r\n]*)*"
    ).unwrap();

    static ref MARKDOWN_LINK_REGEX: Regex = Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap();
}

/// A list block judged to be a TOC, as a byte span of the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocBlock {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Find the list blocks of `document` that are copies of `canonical_toc`, old or current
pub fn detect_toc_blocks(document: &str, canonical_toc: &str, config: &TocConfig) -> Vec<TocBlock> {
    if canonical_toc.is_empty() {
        return Vec::new();
    }

    let canonical = normalize_line_endings(canonical_toc, LineEnding::Lf);
    let mut blocks = Vec::new();

    for candidate in LIST_BLOCK_REGEX.find_iter(document) {
        let list_text = candidate.as_str();

        if preceding_line(document, candidate.start()).contains(NO_TOC_MARKER) {
            debug!("Skipping list at byte {}: opted out with '{}'", candidate.start(), NO_TOC_MARKER);
            continue;
        }

        let first_line = list_text.lines().next().unwrap_or("");
        if !looks_like_toc_entry(first_line, config.plaintext) {
            continue;
        }

        let score = score_candidate(&normalize_line_endings(list_text, LineEnding::Lf), &canonical);
        debug!("List at byte {} scored {:.3}", candidate.start(), score);

        if score > SCORE_THRESHOLD {
            blocks.push(TocBlock {
                start: candidate.start(),
                end: candidate.end(),
                text: list_text.to_string(),
            });
        }
    }

    blocks
}

/// Combined prefix and similarity score of a candidate against the canonical TOC
pub fn score_candidate(candidate: &str, canonical: &str) -> f64 {
    prefix_ratio(candidate, canonical) + dice_similarity(candidate, canonical)
}

/// Shape check on the first line of a candidate list.
///
/// A plaintext TOC has no links; a linked TOC starts with `- [Title](#anchor)`.
fn looks_like_toc_entry(first_line: &str, plaintext: bool) -> bool {
    if plaintext {
        !MARKDOWN_LINK_REGEX.is_match(first_line)
    } else {
        first_line.contains("](#")
            && first_line
                .split_whitespace()
                .nth(1)
                .map_or(false, |token| token.starts_with('['))
    }
}

/// The line before the one containing `offset`, or "" on the first line
fn preceding_line(document: &str, offset: usize) -> &str {
    let before = &document[..offset];
    let before = before.strip_suffix('\n').unwrap_or(before);
    if before.len() == offset {
        // offset is not at a line start
        return "";
    }
    let before = before.strip_suffix('\r').unwrap_or(before);
    match before.rfind('\n') {
        Some(pos) => &before[pos + 1..],
        None => before,
    }
}
