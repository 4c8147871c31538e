//! `dockyard restart` — stop and start one or more projects.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::project_restart as service;

/// Arguments for the restart command.
#[derive(Args, Debug, Default)]
pub struct RestartArgs {
    /// Projects to restart (default: the project containing the current directory)
    #[arg(value_name = "PROJECTS")]
    pub projects: Vec<String>,

    /// Restart all projects
    #[arg(short, long)]
    pub all: bool,
}

/// Run `dockyard restart`.
///
/// # Errors
///
/// Returns an error if the network cannot be ensured, the selection cannot
/// be resolved, or any project fails to stop or start.
pub async fn run(args: &RestartArgs, app: &AppContext) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let network = app.network();
    let resolver = app.resolver(cwd);
    let reporter = app.terminal_reporter();

    let report =
        service::restart_projects(&network, &resolver, &reporter, &args.projects, args.all)
            .await?;

    if report.restarted.is_empty() {
        app.output.info("No projects to restart.");
    }
    Ok(ExitCode::SUCCESS)
}
