//! CLI argument parsing with clap derive
//!
//! The `Command` enum is the command table: it is built once by
//! `Cli::parse()` and dispatched by `Cli::run`.

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Local containerized development projects
#[derive(Parser, Debug)]
#[command(
    name = "dockyard",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Restart a project or several projects
    ///
    /// Stops the named projects and then starts them back up again.
    Restart(commands::restart::RestartArgs),

    /// List registered projects and their URLs
    List(commands::list::ListArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the application context cannot be built or the
    /// command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&AppFlags { no_color, quiet })?;
        match command {
            Command::Restart(args) => commands::restart::run(&args, &app).await,
            Command::List(args) => commands::list::run(&args, &app).await,
        }
    }
}
