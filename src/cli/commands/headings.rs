use crate::cli::commands::{open_document, CommandContext};
use crate::cli::types::Commands;
use crate::document::DocumentSource;
use crate::markdown::{build_toc, HeadingEntry};
use crate::utils::error::BoxResult;

/// Handle the headings command
pub fn handle_headings_command(command: &Commands, context: &CommandContext) -> BoxResult<i32> {
    if let Commands::Headings { file, json } = command {
        let (settings, _) = context.load()?;
        let doc = open_document(file, &settings)?;
        let headings = build_toc(doc.text());
        println!("{}", render_headings(&headings, *json)?);
    }

    Ok(0)
}

fn render_headings(headings: &[HeadingEntry], json: bool) -> BoxResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(headings)?);
    }

    Ok(headings
        .iter()
        .map(|heading| format!("{} {}", "#".repeat(heading.level), heading.text))
        .collect::<Vec<_>>()
        .join("\n"))
}
