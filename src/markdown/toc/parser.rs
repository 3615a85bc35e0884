use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::markdown::types::HeadingEntry;

/// Stands in for an `<!-- omit in toc -->` comment once comments have been stripped
const OMIT_SENTINEL: &str = "\u{E000}omit in toc\u{E000}";

lazy_static! {
    static ref FENCED_CODE_REGEX: Regex = Regex::new(r"(?ms)^ {0,3}```.+?^ {0,3}```[^\n]*$").unwrap();
    static ref OMIT_MARKER_REGEX: Regex = Regex::new(r"(?i)<!--\s*omit in toc\s*-->").unwrap();
    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref FRONT_MATTER_REGEX: Regex = Regex::new(r"(?s)\A---[ \t]*\r?\n.*?\r?\n---[ \t]*(?:\r?\n|\z)").unwrap();
    static ref SETEXT_UNDERLINE_REGEX: Regex = Regex::new(r"^ {0,3}(=+|-{2,}) *$").unwrap();
    static ref SETEXT_TEXT_REGEX: Regex = Regex::new(r"^ {0,3}\S").unwrap();
    static ref LIST_ITEM_REGEX: Regex = Regex::new(r"^ {0,3}(?:[-+*]|[0-9]+[.)])(?:\s|$)").unwrap();
    static ref ATX_HEADING_REGEX: Regex = Regex::new(r"^(#+) (.*)$").unwrap();
    static ref CLOSING_HASHES_REGEX: Regex = Regex::new(r"(?:^|\s+)#+$").unwrap();
}

/// Extract the headings of a markdown document, in document order
pub fn build_toc(text: &str) -> Vec<HeadingEntry> {
    let text = strip_fenced_code(text);
    let text = mark_omitted_headings(&text);
    let text = strip_first_comment(&text);
    let text = strip_front_matter(&text);

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    convert_setext_headings(&mut lines);
    suppress_omitted_lines(&mut lines);

    let headings: Vec<HeadingEntry> = lines
        .iter()
        .filter(|line| is_heading_line(line))
        .filter_map(|line| parse_heading_line(line))
        .collect();

    debug!("Extracted {} heading(s)", headings.len());
    headings
}

/// Remove fenced code blocks, opening fence through closing fence
pub fn strip_fenced_code(text: &str) -> String {
    FENCED_CODE_REGEX.replace_all(text, "").into_owned()
}

/// Replace omit-in-toc comments with a sentinel that survives comment stripping
pub fn mark_omitted_headings(text: &str) -> String {
    OMIT_MARKER_REGEX.replace_all(text, OMIT_SENTINEL).into_owned()
}

/// Remove the first HTML comment
pub fn strip_first_comment(text: &str) -> String {
    COMMENT_REGEX.replace(text, "").into_owned()
}

/// Remove a YAML front matter block at the top of the document
pub fn strip_front_matter(text: &str) -> String {
    FRONT_MATTER_REGEX.replace(text, "").into_owned()
}

/// Rewrite setext headings into ATX form in place.
///
/// An underline is consumed by the heading above it and cannot itself become
/// the text of another setext heading.
pub fn convert_setext_headings(lines: &mut [String]) {
    let mut i = 0;
    while i + 1 < lines.len() {
        let text = &lines[i];
        let is_heading_text = SETEXT_TEXT_REGEX.is_match(text)
            && text.chars().any(|c| c != ' ' && c != '-')
            && !text.trim_start().starts_with('#')
            && !LIST_ITEM_REGEX.is_match(text);

        if is_heading_text {
            if let Some(caps) = SETEXT_UNDERLINE_REGEX.captures(&lines[i + 1]) {
                let prefix = if caps[1].starts_with('=') { "# " } else { "## " };
                lines[i] = format!("{}{}", prefix, lines[i].trim());
                i += 2;
                continue;
            }
        }
        i += 1;
    }
}

/// Blank out every line that directly follows a standalone omit sentinel
pub fn suppress_omitted_lines(lines: &mut [String]) {
    for i in 1..lines.len() {
        if lines[i - 1].trim() == OMIT_SENTINEL {
            lines[i].clear();
        }
    }
}

/// Whether a line is an ATX heading that belongs in the TOC
fn is_heading_line(line: &str) -> bool {
    line.trim().starts_with('#')
        && indent_width(line) < 4
        && line.contains("# ")
        && !line.contains(OMIT_SENTINEL)
}

/// Leading indentation in columns, tabs advancing to the next multiple of 4
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4 - width % 4,
            _ => break,
        }
    }
    width
}

fn parse_heading_line(line: &str) -> Option<HeadingEntry> {
    let line = line.trim_start_matches(' ');
    let caps = ATX_HEADING_REGEX.captures(line)?;
    let level = caps[1].len();
    let text = CLOSING_HASHES_REGEX.replace(caps[2].trim_end(), "");
    let text = text.trim();

    // `# ` or `# ##` on its own is an empty heading
    if text.is_empty() {
        return None;
    }

    Some(HeadingEntry::new(level, text))
}
