use log::warn;

use crate::config::types::Settings;
use crate::utils::error::{BoxResult, MdtocError};

/// Bullets accepted for unordered lists
const LIST_MARKERS: [&str; 3] = ["-", "*", "+"];

/// Validate the settings
pub fn validate_settings(settings: &Settings) -> BoxResult<()> {
    parse_depth_range(&settings.toc.levels)?;

    // Validate list marker
    validate_list_marker(&settings.toc.unordered_list_marker)?;

    // Validate editor settings
    validate_editor(settings)?;

    Ok(())
}

/// Parse a `"<start>..<end>"` depth range into `(start, end)`
pub fn parse_depth_range(levels: &str) -> BoxResult<(usize, usize)> {
    let (start, end) = levels.trim().split_once("..").ok_or_else(|| {
        MdtocError::Config(format!("Invalid heading levels '{}', expected <start>..<end>", levels))
    })?;

    let parse = |value: &str| -> BoxResult<usize> {
        value.trim().parse::<usize>().map_err(|e| {
            MdtocError::Config(format!("Invalid heading level '{}' in '{}': {}", value, levels, e)).into()
        })
    };
    let start = parse(start)?;
    let end = parse(end)?;

    if !(1..=6).contains(&start) || !(1..=6).contains(&end) {
        return Err(MdtocError::Config(format!(
            "Heading levels must be between 1 and 6: {}", levels
        )).into());
    }

    if start > end {
        return Err(MdtocError::Config(format!(
            "Start level is greater than end level: {}", levels
        )).into());
    }

    Ok((start, end))
}

/// Validate the unordered list marker
fn validate_list_marker(marker: &str) -> BoxResult<()> {
    if !LIST_MARKERS.contains(&marker) {
        return Err(MdtocError::Config(format!(
            "Unsupported list marker '{}', expected one of {:?}", marker, LIST_MARKERS
        )).into());
    }
    Ok(())
}

/// Validate the editor section
fn validate_editor(settings: &Settings) -> BoxResult<()> {
    let editor = &settings.editor;

    if editor.tab_size == 0 {
        return Err(MdtocError::Config("Tab size must be at least 1".to_string()).into());
    }

    // An empty extension list is legal but nothing will be treated as markdown
    if editor.markdown_extensions.is_empty() {
        warn!("No markdown extensions configured; TOC commands will skip every file");
    }

    Ok(())
}
