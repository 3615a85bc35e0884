use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate and keep markdown tables of contents up to date", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file, may be repeated (later files win)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Heading levels to include, e.g. 2..4
    #[arg(long, value_name = "START..END", global = true)]
    pub levels: Option<String>,

    /// Render an ordered list
    #[arg(long, default_value_t = false, global = true)]
    pub ordered: bool,

    /// Bullet for unordered lists (-, * or +)
    #[arg(long, value_name = "MARKER", global = true)]
    pub marker: Option<String>,

    /// Render entries without links
    #[arg(long, default_value_t = false, global = true)]
    pub plaintext: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only print errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert a table of contents into a file
    #[command(alias = "c")]
    Create {
        /// Markdown file to edit
        file: PathBuf,

        /// Line to insert at (1-based)
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        line: usize,

        /// Column to insert at (1-based)
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        column: usize,

        /// Print the resulting document instead of writing the file
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },

    /// Update the tables of contents in files and directories
    #[command(alias = "u")]
    Update {
        /// Files or directories to update
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write nothing, exit with status 1 if any table of contents is out of date
        #[arg(long, default_value_t = false)]
        check: bool,

        /// Print the resulting documents instead of writing the files
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },

    /// Show whether each table of contents in a file is up to date
    #[command(alias = "s")]
    Status {
        /// Markdown file to inspect
        file: PathBuf,
    },

    /// List the headings a table of contents would be built from
    Headings {
        /// Markdown file to inspect
        file: PathBuf,

        /// Print headings as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Watch files and update their tables of contents when they change
    #[command(alias = "w")]
    Watch {
        /// Files or directories to watch
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Glob pattern of paths to leave alone, may be repeated
        #[arg(long, value_name = "PATTERN")]
        ignore: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "mdtoc", "--levels", "2..3", "--ordered", "--config", "a.toml", "--config", "b.yml", "status", "README.md",
        ])
        .unwrap();

        assert_eq!(cli.levels.as_deref(), Some("2..3"));
        assert!(cli.ordered);
        assert_eq!(cli.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.yml")]);
        assert!(matches!(cli.command, Commands::Status { ref file } if file == &PathBuf::from("README.md")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mdtoc", "update", "docs", "--check", "-g", "--marker", "*"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.marker.as_deref(), Some("*"));
        match cli.command {
            Commands::Update { paths, check, stdout } => {
                assert_eq!(paths, vec![PathBuf::from("docs")]);
                assert!(check);
                assert!(!stdout);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_defaults_to_document_start() {
        let cli = Cli::try_parse_from(["mdtoc", "create", "README.md"]).unwrap();
        match cli.command {
            Commands::Create { line, column, stdout, .. } => {
                assert_eq!((line, column), (1, 1));
                assert!(!stdout);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_requires_a_path() {
        assert!(Cli::try_parse_from(["mdtoc", "update"]).is_err());
        assert!(Cli::try_parse_from(["mdtoc", "watch"]).is_err());
    }

    #[test]
    fn test_watch_ignore_patterns() {
        let cli = Cli::try_parse_from(["mdtoc", "watch", ".", "--ignore", "**/vendor/**", "--ignore", "*.tmp.md"]).unwrap();
        match cli.command {
            Commands::Watch { ignore, .. } => assert_eq!(ignore, vec!["**/vendor/**", "*.tmp.md"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
