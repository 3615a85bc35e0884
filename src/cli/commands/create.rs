use log::{info, warn};

use crate::cli::commands::{open_document, CommandContext};
use crate::cli::types::Commands;
use crate::document::{DocumentSource, Position};
use crate::editor;
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs::write_file;

/// Handle the create command
pub fn handle_create_command(command: &Commands, context: &CommandContext) -> BoxResult<i32> {
    if let Commands::Create { file, line, column, stdout } = command {
        let (settings, toc_config) = context.load()?;
        let mut doc = open_document(file, &settings)?;

        // Command line positions are 1-based
        let cursor = Position::new(line.saturating_sub(1), column.saturating_sub(1));
        check_cursor(&doc, cursor)?;

        if !editor::create_toc(Some(&mut doc), cursor, &toc_config)? {
            warn!("No table of contents created for {}: not markdown or no headings", file.display());
            return Ok(0);
        }

        if *stdout {
            print!("{}", doc.text());
        } else {
            write_file(file, doc.text())?;
            info!("Created table of contents in {} at {}", file.display(), cursor);
        }
    }

    Ok(0)
}

/// Reject positions past the end of a line or of the document
fn check_cursor<D: DocumentSource + ?Sized>(doc: &D, cursor: Position) -> BoxResult<()> {
    let line = doc.line_at(cursor.line).ok_or_else(|| {
        MdtocError::Document(format!("line {} is past the end of the document ({} lines)", cursor.line + 1, doc.line_count()))
    })?;

    if cursor.character > line.len() {
        return Err(MdtocError::Document(format!(
            "column {} is past the end of line {}", cursor.character + 1, cursor.line + 1
        )).into());
    }

    Ok(())
}
