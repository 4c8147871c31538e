//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod project;

pub use config::{DockerConfig, DockyardConfig, NetworkConfig, RouterConfig};
pub use error::{ConfigError, ProjectError, RestartError};
pub use project::{ProjectEntry, project_urls, select_projects, validate_project_name};
