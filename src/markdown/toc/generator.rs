use log::debug;

use crate::config::TocConfig;
use crate::markdown::toc::anchor::AnchorRegistry;
use crate::markdown::types::{DocFormatting, HeadingEntry};
use crate::markdown::utils::text::extract_text;

/// Render headings as a nested markdown list.
///
/// Returns an empty string when there is nothing to list.
pub fn generate_toc(headings: &[HeadingEntry], config: &TocConfig, formatting: &DocFormatting) -> String {
    let min_level = match headings.iter().map(|h| h.level).min() {
        Some(level) => level,
        None => return String::new(),
    };

    // A document whose shallowest heading is h2 starts its list at h2
    let start_depth = config.start_depth.max(min_level);
    let end_depth = config.end_depth;

    let mut registry = AnchorRegistry::new();
    let mut counters = vec![0usize; end_depth.saturating_sub(start_depth) + 1];
    let mut lines = Vec::new();

    for heading in headings
        .iter()
        .filter(|h| h.level >= start_depth && h.level <= end_depth)
    {
        let indentation = heading.level - start_depth;
        let text = extract_text(&heading.text);
        let anchor = registry.anchor_for(&text);

        let marker = if config.ordered_list {
            if config.ordered_list_marker_is_one {
                "1.".to_string()
            } else {
                counters[indentation] += 1;
                format!("{}.", counters[indentation])
            }
        } else {
            config.list_marker.clone()
        };

        // Deeper numbering restarts under every new entry
        for counter in counters.iter_mut().skip(indentation + 1) {
            *counter = 0;
        }

        let body = if config.plaintext {
            text
        } else {
            format!("[{}](#{})", text, anchor)
        };

        lines.push(format!(
            "{}{} {}",
            formatting.indent_unit.repeat(indentation),
            marker,
            body
        ));
    }

    // The list must open at column 0
    let lines: Vec<String> = lines
        .into_iter()
        .skip_while(|line| line.starts_with(char::is_whitespace))
        .collect();

    debug!("Rendered TOC with {} line(s)", lines.len());
    lines.join(formatting.line_terminator.as_str())
}
