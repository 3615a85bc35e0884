use std::path::Path;

use log::{debug, info, warn};

use crate::cli::commands::{open_document, CommandContext};
use crate::cli::types::Commands;
use crate::config::{Settings, TocConfig};
use crate::document::DocumentSource;
use crate::editor;
use crate::utils::error::BoxResult;
use crate::utils::fs::{collect_markdown_files, write_file};

/// What to do with a file whose TOC is out of date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateMode {
    Write,
    Print,
    Check,
}

/// Handle the update command
pub fn handle_update_command(command: &Commands, context: &CommandContext) -> BoxResult<i32> {
    if let Commands::Update { paths, check, stdout } = command {
        let (settings, toc_config) = context.load()?;
        let mode = if *check {
            UpdateMode::Check
        } else if *stdout {
            UpdateMode::Print
        } else {
            UpdateMode::Write
        };

        let files = collect_markdown_files(paths, &settings.editor.markdown_extensions)?;
        let mut stale = 0;
        for file in &files {
            if update_file(file, &settings, &toc_config, mode)? {
                stale += 1;
            }
        }

        match mode {
            UpdateMode::Check if stale > 0 => {
                warn!("{} of {} file(s) have an out of date table of contents", stale, files.len());
                return Ok(1);
            }
            UpdateMode::Write => info!("Updated {} of {} file(s)", stale, files.len()),
            _ => {}
        }
    }

    Ok(0)
}

/// Update one file, returning whether its TOC was out of date
fn update_file(path: &Path, settings: &Settings, toc_config: &TocConfig, mode: UpdateMode) -> BoxResult<bool> {
    let mut doc = open_document(path, settings)?;

    if !editor::is_markdown(&doc) {
        debug!("Skipping {}: not a markdown file", path.display());
        return Ok(false);
    }

    if mode == UpdateMode::Check {
        let stale = !editor::compute_update_edits(&doc, toc_config).is_empty();
        if stale {
            info!("{}: table of contents is out of date", path.display());
        }
        return Ok(stale);
    }

    let edits = editor::update_toc(Some(&mut doc), toc_config)?;
    match mode {
        UpdateMode::Print => print!("{}", doc.text()),
        _ if edits > 0 => {
            write_file(path, doc.text())?;
            info!("{}: updated table of contents", path.display());
        }
        _ => debug!("{}: table of contents is up to date", path.display()),
    }

    Ok(edits > 0)
}
