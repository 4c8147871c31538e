//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Project errors ────────────────────────────────────────────────────────────

/// Errors raised while turning a name list (or `--all`) into projects.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(
        "Project(s) not found: {}. Run 'dockyard list' to see registered projects.",
        .0.join(", ")
    )]
    NotFound(Vec<String>),

    #[error(
        "No project selected: {} is not inside a registered project. \
         Name one or more projects, or pass --all.",
        .cwd.display()
    )]
    NoProjectSelected { cwd: PathBuf },

    #[error("Invalid project name '{0}': must match ^[A-Za-z0-9][A-Za-z0-9-]{{0,62}}$")]
    InvalidName(String),

    #[error("Project '{0}' is registered more than once.")]
    Duplicate(String),

    #[error("Project '{name}' has a relative root '{}'; roots must be absolute.", .approot.display())]
    RelativeRoot { name: String, approot: PathBuf },

    #[error("Cannot load project registry: {0:#}")]
    Registry(anyhow::Error),
}

// ── Restart errors ────────────────────────────────────────────────────────────

/// Errors that abort `dockyard restart`. Each names the phase that failed.
#[derive(Debug, Error)]
pub enum RestartError {
    #[error("Failed to ensure container network: {0:#}")]
    NetworkPreconditionFailed(anyhow::Error),

    #[error("Failed to get project(s)")]
    ProjectResolutionFailed(#[from] ProjectError),

    #[error("Failed to restart {project}: stop failed: {cause:#}")]
    StopFailed { project: String, cause: anyhow::Error },

    #[error("Failed to restart {project}: start failed: {cause:#}")]
    StartFailed { project: String, cause: anyhow::Error },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
