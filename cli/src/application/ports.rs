//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;

use anyhow::Result;

use crate::domain::{DockyardConfig, ProjectEntry, ProjectError};

// ── Value Types ───────────────────────────────────────────────────────────────

/// How a project should be stopped.
///
/// The default is a normal stop: containers are removed, volumes are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopOptions {
    /// Also delete the project's volumes (database contents, uploads).
    pub remove_data: bool,
    /// Only halt the containers, leaving them in place.
    pub skip_cleanup: bool,
}

/// Result of ensuring the shared network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Created,
    AlreadyPresent,
}

// ── Project Ports ─────────────────────────────────────────────────────────────

/// A handle on one project's lifecycle.
#[allow(async_fn_in_trait)]
pub trait Project {
    /// The project's unique name.
    fn name(&self) -> &str;
    /// Stop the project's containers.
    async fn stop(&self, opts: StopOptions) -> Result<()>;
    /// Start the project's containers.
    async fn start(&self) -> Result<()>;
    /// Every URL the project is reachable at, in display order.
    fn all_urls(&self) -> Vec<String>;
}

/// Turns a CLI selection into project handles.
#[allow(async_fn_in_trait)]
pub trait ProjectResolver {
    type Project: Project;

    /// Resolve `names` (or every project when `all`) into ordered handles.
    ///
    /// # Errors
    ///
    /// Returns a `ProjectError` naming the first project that cannot be
    /// resolved, or describing why nothing was selected.
    async fn resolve(&self, names: &[String], all: bool)
    -> Result<Vec<Self::Project>, ProjectError>;
}

/// Persistent list of known projects.
#[allow(async_fn_in_trait)]
pub trait ProjectRegistry {
    /// Load every registered project, in file order.
    async fn load_projects(&self) -> Result<Vec<ProjectEntry>>;
}

// ── Network Port ──────────────────────────────────────────────────────────────

/// The virtual network shared by all project containers.
#[allow(async_fn_in_trait)]
pub trait ContainerNetwork {
    /// Create the network if it does not exist. Must be idempotent.
    async fn ensure_network(&self) -> Result<NetworkStatus>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the user configuration file.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// fails validation.
    fn load(&self) -> Result<DockyardConfig>;
    /// Location of the configuration file.
    fn path(&self) -> &std::path::Path;
}
