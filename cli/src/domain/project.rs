//! Project domain types, selection, and URL building.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! The caller supplies the registry snapshot and the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::config::RouterConfig;
use crate::domain::error::ProjectError;

/// Maximum project name length (one DNS label).
pub const MAX_NAME_LEN: usize = 63;

/// A project as recorded in `~/.dockyard/projects.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Unique project name, also the primary hostname label.
    pub name: String,
    /// Absolute path of the project's root directory.
    pub approot: PathBuf,
    /// Extra hostname labels served alongside `name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_hostnames: Vec<String>,
}

/// Validates a project name: one DNS label, letters, digits and `-`.
///
/// # Errors
///
/// Returns `ProjectError::InvalidName` if the name doesn't match.
pub fn validate_project_name(name: &str) -> Result<(), ProjectError> {
    let mut chars = name.chars();
    let valid = name.len() <= MAX_NAME_LEN
        && chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ProjectError::InvalidName(name.to_string()))
    }
}

/// Checks a freshly loaded registry: valid names, no duplicates, absolute roots.
///
/// # Errors
///
/// Returns the first problem found, in registry order.
pub fn validate_registry(entries: &[ProjectEntry]) -> Result<(), ProjectError> {
    for (i, entry) in entries.iter().enumerate() {
        validate_project_name(&entry.name)?;
        if !entry.approot.is_absolute() {
            return Err(ProjectError::RelativeRoot {
                name: entry.name.clone(),
                approot: entry.approot.clone(),
            });
        }
        if entries[..i].iter().any(|e| e.name == entry.name) {
            return Err(ProjectError::Duplicate(entry.name.clone()));
        }
    }
    Ok(())
}

/// Turns a CLI selection into the ordered list of projects to operate on.
///
/// - `all`: every entry, sorted by name; `names` is ignored.
/// - explicit `names`: in the order given, duplicates collapsed; every name
///   must be registered.
/// - neither: the project whose root contains `cwd` (deepest root wins).
///
/// # Errors
///
/// Returns `InvalidName`, `NotFound` naming every unknown project, or
/// `NoProjectSelected` when `cwd` is outside every registered project.
pub fn select_projects(
    entries: &[ProjectEntry],
    names: &[String],
    all: bool,
    cwd: &Path,
) -> Result<Vec<ProjectEntry>, ProjectError> {
    if all {
        let mut selected = entries.to_vec();
        selected.sort_by(|a, b| a.name.cmp(&b.name));
        return Ok(selected);
    }

    if names.is_empty() {
        return entries
            .iter()
            .filter(|e| cwd.starts_with(&e.approot))
            .max_by_key(|e| e.approot.components().count())
            .cloned()
            .map(|e| vec![e])
            .ok_or_else(|| ProjectError::NoProjectSelected {
                cwd: cwd.to_path_buf(),
            });
    }

    let mut selected: Vec<ProjectEntry> = Vec::with_capacity(names.len());
    let mut missing: Vec<String> = Vec::new();
    for name in names {
        validate_project_name(name)?;
        if selected.iter().any(|e| &e.name == name) || missing.contains(name) {
            continue;
        }
        match entries.iter().find(|e| &e.name == name) {
            Some(entry) => selected.push(entry.clone()),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(ProjectError::NotFound(missing));
    }
    Ok(selected)
}

/// Every URL a project is reachable at: all HTTPS URLs first, then HTTP,
/// the primary hostname ahead of additional ones.
#[must_use]
pub fn project_urls(entry: &ProjectEntry, router: &RouterConfig) -> Vec<String> {
    let mut hosts: Vec<&str> = vec![entry.name.as_str()];
    for extra in &entry.additional_hostnames {
        if !hosts.contains(&extra.as_str()) {
            hosts.push(extra);
        }
    }

    let https = hosts
        .iter()
        .map(|h| url("https", h, &router.tld, router.https_port, 443));
    let http = hosts
        .iter()
        .map(|h| url("http", h, &router.tld, router.http_port, 80));
    https.chain(http).collect()
}

fn url(scheme: &str, host: &str, tld: &str, port: u16, default_port: u16) -> String {
    if port == default_port {
        format!("{scheme}://{host}.{tld}")
    } else {
        format!("{scheme}://{host}.{tld}:{port}")
    }
}
