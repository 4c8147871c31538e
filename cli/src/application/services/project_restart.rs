//! Application service — project restart use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::ports::{
    ContainerNetwork, ProgressReporter, Project, ProjectResolver, StopOptions,
};
use crate::domain::RestartError;

/// Stop mode used between the two halves of a restart: keep volumes,
/// remove containers.
pub const RESTART_STOP: StopOptions = StopOptions {
    remove_data: false,
    skip_cleanup: false,
};

/// A project that completed its stop/start cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartedProject {
    pub name: String,
    pub urls: Vec<String>,
}

/// Outcome of the `restart_projects` use-case when every project succeeded.
#[derive(Debug, Default)]
pub struct RestartReport {
    /// Projects in the order they were restarted.
    pub restarted: Vec<RestartedProject>,
}

/// Restart the selected projects one after another.
///
/// The shared network is ensured first, exactly once, whatever the
/// selection. Projects are then stopped and started strictly in resolver
/// order. The first failure aborts the run: later projects are never
/// touched, and a project whose start failed is left stopped.
///
/// # Errors
///
/// Returns the `RestartError` for the first phase that failed.
pub async fn restart_projects(
    network: &impl ContainerNetwork,
    resolver: &impl ProjectResolver,
    reporter: &impl ProgressReporter,
    names: &[String],
    all: bool,
) -> Result<RestartReport, RestartError> {
    let status = network
        .ensure_network()
        .await
        .map_err(RestartError::NetworkPreconditionFailed)?;
    tracing::debug!(?status, "container network ready");

    let projects = resolver.resolve(names, all).await?;
    tracing::info!(count = projects.len(), all, "restarting projects");

    let mut report = RestartReport::default();
    for project in &projects {
        report.restarted.push(restart_one(project, reporter).await?);
    }
    Ok(report)
}

async fn restart_one(
    project: &impl Project,
    reporter: &impl ProgressReporter,
) -> Result<RestartedProject, RestartError> {
    let name = project.name();
    reporter.step(&format!("Restarting project {name}..."));

    tracing::info!(project = name, "stopping");
    project
        .stop(RESTART_STOP)
        .await
        .map_err(|cause| RestartError::StopFailed {
            project: name.to_string(),
            cause,
        })?;

    tracing::info!(project = name, "starting");
    project
        .start()
        .await
        .map_err(|cause| RestartError::StartFailed {
            project: name.to_string(),
            cause,
        })?;

    let urls = project.all_urls();
    reporter.success(&format!("Restarted {name}"));
    if urls.is_empty() {
        reporter.warn(&format!("{name} has no reachable URLs"));
    } else {
        reporter.success(&format!(
            "Your project can be reached at {}",
            urls.join(", ")
        ));
    }

    Ok(RestartedProject {
        name: name.to_string(),
        urls,
    })
}
