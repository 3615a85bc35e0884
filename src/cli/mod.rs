pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;

/// Run the command-line interface, returning the process exit code
pub async fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(logging::log_level(cli.debug, cli.quiet));
    logging::configure_backtrace(cli.trace);

    let context = commands::CommandContext::from_cli(&cli);

    let result = match &cli.command {
        types::Commands::Create { .. } => commands::handle_create_command(&cli.command, &context),
        types::Commands::Update { .. } => commands::handle_update_command(&cli.command, &context),
        types::Commands::Status { .. } => commands::handle_status_command(&cli.command, &context),
        types::Commands::Headings { .. } => commands::handle_headings_command(&cli.command, &context),
        types::Commands::Watch { .. } => commands::handle_watch_command(&cli.command, &context).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
