//! `Project` port backed by `docker compose`.
//!
//! Each project keeps its compose file at `<approot>/.dockyard/docker-compose.yaml`
//! and runs under the compose project name equal to its registry name.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, Project, StopOptions};
use crate::domain::config::DockyardConfig;
use crate::domain::project::{ProjectEntry, project_urls};

/// Compose file location relative to the project root.
pub const COMPOSE_FILE: &str = ".dockyard/docker-compose.yaml";

/// A registered project driven through the docker compose CLI.
pub struct ComposeProject<'a, R> {
    runner: &'a R,
    config: &'a DockyardConfig,
    entry: ProjectEntry,
}

impl<'a, R: CommandRunner> ComposeProject<'a, R> {
    pub fn new(runner: &'a R, config: &'a DockyardConfig, entry: ProjectEntry) -> Self {
        Self {
            runner,
            config,
            entry,
        }
    }

    fn compose_args(&self, action: &[&str]) -> Result<Vec<String>> {
        let root = self.entry.approot.to_str().with_context(|| {
            format!(
                "project root {} is not valid UTF-8",
                self.entry.approot.display()
            )
        })?;
        let file = self.entry.approot.join(COMPOSE_FILE);
        let file = file
            .to_str()
            .context("compose file path is not valid UTF-8")?
            .to_string();

        let mut args: Vec<String> = [
            "compose",
            "-p",
            self.entry.name.as_str(),
            "--project-directory",
            root,
            "-f",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        args.push(file);
        args.extend(action.iter().map(ToString::to_string));
        Ok(args)
    }

    async fn compose(&self, action: &[&str]) -> Result<()> {
        let args = self.compose_args(action)?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let docker = self.config.docker.binary.as_str();
        let output = self
            .runner
            .run(docker, &args)
            .await
            .with_context(|| format!("running docker compose {}", action.join(" ")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "docker compose {} exited with {}: {}",
                action.join(" "),
                output.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}

/// The compose subcommand matching a stop mode. `remove_data` wins over
/// `skip_cleanup` since volumes cannot be removed while containers remain.
#[must_use]
pub fn stop_action(opts: StopOptions) -> &'static [&'static str] {
    match opts {
        StopOptions {
            remove_data: true, ..
        } => &["down", "--volumes"],
        StopOptions {
            skip_cleanup: true, ..
        } => &["stop"],
        _ => &["down"],
    }
}

impl<R: CommandRunner> Project for ComposeProject<'_, R> {
    fn name(&self) -> &str {
        &self.entry.name
    }

    async fn stop(&self, opts: StopOptions) -> Result<()> {
        self.compose(stop_action(opts)).await
    }

    async fn start(&self) -> Result<()> {
        self.compose(&["up", "-d"]).await
    }

    fn all_urls(&self) -> Vec<String> {
        project_urls(&self.entry, &self.config.router)
    }
}
