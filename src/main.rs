// Module declarations
mod cli;
mod config;
mod document;
mod editor;
mod markdown;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    let code = cli::run().await;
    std::process::exit(code);
}
