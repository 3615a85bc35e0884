mod create;
mod headings;
mod status;
mod update;
mod watch;

pub use create::handle_create_command;
pub use headings::handle_headings_command;
pub use status::handle_status_command;
pub use update::handle_update_command;
pub use watch::handle_watch_command;

use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::types::Cli;
use crate::config::{self, Settings, TocConfig};
use crate::document::{language_for_path, TextDocument};
use crate::utils::error::BoxResult;
use crate::utils::fs::read_file;

/// TOC options given on the command line, applied over the loaded settings
#[derive(Debug, Clone, Default)]
pub struct TocOverrides {
    pub levels: Option<String>,
    pub ordered: bool,
    pub marker: Option<String>,
    pub plaintext: bool,
}

impl TocOverrides {
    fn apply(&self, settings: &mut Settings) {
        if let Some(levels) = &self.levels {
            settings.toc.levels = levels.clone();
        }
        if self.ordered {
            settings.toc.ordered_list = true;
        }
        if let Some(marker) = &self.marker {
            settings.toc.unordered_list_marker = marker.clone();
        }
        if self.plaintext {
            settings.toc.plaintext = true;
        }
    }
}

/// Everything a command needs to build its configuration
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory searched for default settings files
    pub source_dir: PathBuf,
    pub config_files: Vec<PathBuf>,
    pub overrides: TocOverrides,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source_dir: PathBuf::from("."),
            config_files: cli.config.clone(),
            overrides: TocOverrides {
                levels: cli.levels.clone(),
                ordered: cli.ordered,
                marker: cli.marker.clone(),
                plaintext: cli.plaintext,
            },
        }
    }

    /// Load settings from disk with the command line overrides applied.
    ///
    /// Called once per command (and once per batch while watching) so edits to
    /// the settings files are picked up without restarting.
    pub fn load(&self) -> BoxResult<(Settings, TocConfig)> {
        let mut settings = config::load_settings(&self.source_dir, Some(self.config_files.clone()))?;
        self.overrides.apply(&mut settings);
        let toc_config = TocConfig::from_settings(&settings)?;
        debug!("Using {:?}", toc_config);
        Ok((settings, toc_config))
    }
}

/// Read a file into a document, picking its language from the extension
pub fn open_document(path: &Path, settings: &Settings) -> BoxResult<TextDocument> {
    let text = read_file(path)?;
    let language = language_for_path(path, &settings.editor.markdown_extensions);
    Ok(TextDocument::new(text, language).with_indentation(settings.editor.indentation()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{CommandContext, TocOverrides};

    /// Context reading settings from `dir` only
    pub fn context(dir: &Path) -> CommandContext {
        CommandContext {
            source_dir: dir.to_path_buf(),
            config_files: Vec::new(),
            overrides: TocOverrides::default(),
        }
    }

    pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{context, write};
    use super::*;
    use crate::document::{DocumentSource, Indentation, MARKDOWN_LANGUAGE_ID};
    use tempfile::tempdir;

    #[test]
    fn test_overrides_win_over_settings_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), ".mdtoc.toml", "[toc]\nlevels = \"1..2\"\nunordered_list_marker = \"+\"\n");

        let mut ctx = context(dir.path());
        let (_, toc_config) = ctx.load().unwrap();
        assert_eq!((toc_config.start_depth, toc_config.end_depth), (1, 2));
        assert_eq!(toc_config.list_marker, "+");

        ctx.overrides = TocOverrides {
            levels: Some("2..4".to_string()),
            ordered: true,
            marker: Some("*".to_string()),
            plaintext: true,
        };
        let (_, toc_config) = ctx.load().unwrap();
        assert_eq!((toc_config.start_depth, toc_config.end_depth), (2, 4));
        assert_eq!(toc_config.list_marker, "*");
        assert!(toc_config.ordered_list);
        assert!(toc_config.plaintext);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.overrides.marker = Some("#".to_string());
        assert!(ctx.load().is_err());
    }

    #[test]
    fn test_open_document() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.editor.insert_spaces = false;

        let path = write(dir.path(), "guide.md", "# Guide\r\n");
        let doc = open_document(&path, &settings).unwrap();
        assert_eq!(doc.language_id(), MARKDOWN_LANGUAGE_ID);
        assert_eq!(doc.indentation(), Indentation::Tabs);
        assert_eq!(doc.text(), "# Guide\r\n");

        let path = write(dir.path(), "notes.txt", "# Notes\n");
        assert_ne!(open_document(&path, &settings).unwrap().language_id(), MARKDOWN_LANGUAGE_ID);

        assert!(open_document(&dir.path().join("missing.md"), &settings).is_err());
    }
}
