//! Project registry on disk and the resolver built on top of it.
//!
//! `YamlProjectRegistry` implements `ProjectRegistry` by reading
//! `projects.yaml`; `RegistryResolver` implements `ProjectResolver` by
//! combining a registry snapshot with the domain selection rules and wrapping
//! each selected entry in a [`ComposeProject`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProjectRegistry, ProjectResolver};
use crate::domain::config::DockyardConfig;
use crate::domain::error::ProjectError;
use crate::domain::project::{ProjectEntry, select_projects, validate_registry};
use crate::infra::compose::ComposeProject;
use crate::infra::config::dockyard_home;

/// Registry file manager — implements `ProjectRegistry` for the infra layer.
pub struct YamlProjectRegistry {
    path: PathBuf,
}

impl YamlProjectRegistry {
    /// Create a registry using `projects.yaml` under [`dockyard_home`].
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(dockyard_home()?.join("projects.yaml")))
    }

    /// Create a registry with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_sync(path: &Path) -> Result<Vec<ProjectEntry>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading registry {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<ProjectEntry> = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing registry {}", path.display()))?;
        validate_registry(&entries)
            .with_context(|| format!("validating registry {}", path.display()))?;
        Ok(entries)
    }
}

impl ProjectRegistry for YamlProjectRegistry {
    async fn load_projects(&self) -> Result<Vec<ProjectEntry>> {
        let path = self.path.clone();
        let entries = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .context("registry load task panicked")??;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded registry");
        Ok(entries)
    }
}

/// Resolves CLI selections against a registry into docker compose projects.
pub struct RegistryResolver<'a, G, R> {
    registry: &'a G,
    runner: &'a R,
    config: &'a DockyardConfig,
    cwd: PathBuf,
}

impl<'a, G: ProjectRegistry, R: CommandRunner> RegistryResolver<'a, G, R> {
    /// `cwd` selects the project when neither names nor `--all` are given.
    pub fn new(registry: &'a G, runner: &'a R, config: &'a DockyardConfig, cwd: PathBuf) -> Self {
        Self {
            registry,
            runner,
            config,
            cwd,
        }
    }
}

impl<'a, G: ProjectRegistry, R: CommandRunner> ProjectResolver for RegistryResolver<'a, G, R> {
    type Project = ComposeProject<'a, R>;

    async fn resolve(
        &self,
        names: &[String],
        all: bool,
    ) -> Result<Vec<Self::Project>, ProjectError> {
        let entries = self
            .registry
            .load_projects()
            .await
            .map_err(ProjectError::Registry)?;
        let resolved = resolve_roots(&entries).await;
        let cwd = canonical_or_raw(&self.cwd).await;
        let selected: Vec<ProjectEntry> = select_projects(&resolved, names, all, &cwd)?
            .into_iter()
            .filter_map(|picked| entries.iter().find(|e| e.name == picked.name).cloned())
            .collect();
        tracing::debug!(
            selected = ?selected.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            "resolved projects"
        );
        Ok(selected
            .into_iter()
            .map(|entry| ComposeProject::new(self.runner, self.config, entry))
            .collect())
    }
}

/// Registry entries with symlinks in their roots resolved, so they compare
/// equal to the kernel's view of the working directory.
async fn resolve_roots(entries: &[ProjectEntry]) -> Vec<ProjectEntry> {
    let mut resolved = Vec::with_capacity(entries.len());
    for entry in entries {
        resolved.push(ProjectEntry {
            approot: canonical_or_raw(&entry.approot).await,
            ..entry.clone()
        });
    }
    resolved
}

/// Missing or unreadable paths are compared as written.
async fn canonical_or_raw(path: &Path) -> PathBuf {
    tokio::fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf())
}
