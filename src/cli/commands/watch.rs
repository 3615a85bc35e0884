use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glob::Pattern;
use log::{debug, error, info};
use notify::{Event, EventKind, RecursiveMode, Result as NotifyResult, Watcher};
use tokio::sync::mpsc;

use crate::cli::commands::{open_document, CommandContext};
use crate::cli::types::Commands;
use crate::document::DocumentSource;
use crate::editor;
use crate::utils::error::BoxResult;
use crate::utils::fs::{has_extension, write_file};

/// Quiet period after the last change before files are processed
const DEBOUNCE_DURATION: Duration = Duration::from_millis(500);

/// Handle the watch command
pub async fn handle_watch_command(command: &Commands, context: &CommandContext) -> BoxResult<i32> {
    if let Commands::Watch { paths, ignore } = command {
        // Fail early on bad settings rather than on the first change
        context.load()?;

        let (tx, mut rx) = mpsc::unbounded_channel::<PathBuf>();

        let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
            Ok(event) => {
                // Removed files have nothing left to update
                if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                    for path in event.paths {
                        if tx.send(path).is_err() {
                            debug!("Watcher channel closed, dropping event");
                        }
                    }
                }
            }
            Err(e) => error!("Watch error: {}", e),
        })?;

        for path in paths {
            info!("Watching {}", path.display());
            watcher.watch(path, RecursiveMode::Recursive)?;
        }

        info!("Watching for changes. Press Ctrl+C to stop.");

        let mut pending: BTreeSet<PathBuf> = BTreeSet::new();
        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Some(path) => {
                        pending.insert(path);
                    }
                    None => break,
                },
                _ = tokio::time::sleep(DEBOUNCE_DURATION), if !pending.is_empty() => {
                    let changed: Vec<PathBuf> = std::mem::take(&mut pending).into_iter().collect();
                    process_changes(&changed, context, ignore);
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping watcher");
                    break;
                }
            }
        }
    }

    Ok(0)
}

/// Run the before-save update on each changed markdown file, returning how many were rewritten.
///
/// Settings are reloaded for every batch. A file is only written when edits
/// were produced, so our own writes settle after one extra event.
fn process_changes(changed: &[PathBuf], context: &CommandContext, ignore_patterns: &[String]) -> usize {
    let (settings, toc_config) = match context.load() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return 0;
        }
    };

    let mut rewritten = 0;
    for path in changed {
        if !path.is_file()
            || !has_extension(path, &settings.editor.markdown_extensions)
            || should_ignore_path(path, ignore_patterns)
        {
            continue;
        }

        let result = open_document(path, &settings).and_then(|mut doc| {
            let edits = editor::on_will_save(Some(&mut doc), &toc_config)?;
            if edits > 0 {
                write_file(path, doc.text())?;
            }
            Ok(edits)
        });

        match result {
            Ok(0) => debug!("{}: table of contents is up to date", path.display()),
            Ok(_) => {
                info!("{}: updated table of contents", path.display());
                rewritten += 1;
            }
            Err(e) => error!("Failed to update {}: {}", path.display(), e),
        }
    }

    rewritten
}

/// Check if a file path should be ignored based on patterns
fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    for pattern in ignore_patterns {
        match Pattern::new(pattern) {
            Ok(glob) => {
                if glob.matches(&path_str) {
                    debug!("Ignoring {} (matched pattern {})", path_str, pattern);
                    return true;
                }
            }
            Err(e) => error!("Invalid glob pattern '{}': {}", pattern, e),
        }
    }

    false
}
