//! `dockyard list` — show registered projects and their URLs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::ports::ProjectRegistry;
use crate::domain::project::{ProjectEntry, project_urls, select_projects};

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// One project as printed by `dockyard list --json`.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub approot: PathBuf,
    pub urls: Vec<String>,
}

/// Run `dockyard list`.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded or JSON serialization fails.
pub async fn run(args: &ListArgs, app: &AppContext) -> Result<ExitCode> {
    let entries = app.registry.load_projects().await?;
    let sorted = select_projects(&entries, &[], true, &PathBuf::new())?;
    let summaries: Vec<ProjectSummary> = sorted
        .into_iter()
        .map(|entry| summarize(entry, app))
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&summaries).context("JSON serialization failed")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = &app.output;
    if summaries.is_empty() {
        ctx.info(&format!(
            "No projects registered. Add one to {}",
            app.registry.path().display()
        ));
        return Ok(ExitCode::SUCCESS);
    }
    for summary in &summaries {
        ctx.header(&summary.name);
        ctx.kv("Root", &summary.approot.display().to_string());
        ctx.kv("URLs", &summary.urls.join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

fn summarize(entry: ProjectEntry, app: &AppContext) -> ProjectSummary {
    let urls = project_urls(&entry, &app.config.router);
    ProjectSummary {
        name: entry.name,
        approot: entry.approot,
        urls,
    }
}
