use log::info;

use crate::cli::commands::{open_document, CommandContext};
use crate::cli::types::Commands;
use crate::config::TocConfig;
use crate::document::DocumentSource;
use crate::editor::{self, TocLens};
use crate::utils::error::BoxResult;

/// Handle the status command
pub fn handle_status_command(command: &Commands, context: &CommandContext) -> BoxResult<i32> {
    if let Commands::Status { file } = command {
        let (settings, toc_config) = context.load()?;
        let doc = open_document(file, &settings)?;

        let lines = status_lines(&doc, &toc_config);
        if lines.is_empty() {
            info!("No table of contents found in {}", file.display());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(0)
}

/// One `<start line>-<end line>: <label>` line per TOC, lines 1-based
fn status_lines<D: DocumentSource + ?Sized>(doc: &D, toc_config: &TocConfig) -> Vec<String> {
    editor::toc_lenses(doc, toc_config)
        .iter()
        .map(|TocLens { range, label, .. }| format!("{}-{}: {}", range.start.line + 1, range.end.line + 1, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{TextDocument, MARKDOWN_LANGUAGE_ID};

    #[test]
    fn test_status_lines() {
        let text = "# A\n\n- [A](#a)\n  - [B](#b)\n\n## B\n\n- [A](#a)\n\n## C\n";
        let doc = TextDocument::new(text, MARKDOWN_LANGUAGE_ID);
        let lines = status_lines(&doc, &TocConfig::default());
        assert_eq!(
            lines,
            vec![
                "3-4: Table of Contents (out of date)".to_string(),
                "8-8: Table of Contents (out of date)".to_string(),
            ]
        );

        let doc = TextDocument::new("# A\n\n- [A](#a)\n", MARKDOWN_LANGUAGE_ID);
        assert_eq!(status_lines(&doc, &TocConfig::default()), vec!["3-3: Table of Contents (up to date)"]);
    }
}
