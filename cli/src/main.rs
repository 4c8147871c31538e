//! Dockyard CLI - Local containerized development projects

use std::process::ExitCode;

use clap::Parser;

use dockyard_cli::cli::Cli;
use dockyard_cli::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
