//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::DockyardConfig;

/// Directory holding `config.yaml` and `projects.yaml`.
///
/// `DOCKYARD_HOME` overrides the default `~/.dockyard`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn dockyard_home() -> Result<PathBuf> {
    if let Some(val) = std::env::var_os("DOCKYARD_HOME") {
        return Ok(PathBuf::from(val));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(".dockyard"))
}

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    /// Use `DOCKYARD_CONFIG` if set, else `config.yaml` under [`dockyard_home`].
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Some(val) = std::env::var_os("DOCKYARD_CONFIG") {
            return Ok(Self::with_path(PathBuf::from(val)));
        }
        Ok(Self::with_path(dockyard_home()?.join("config.yaml")))
    }

    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DockyardConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(DockyardConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let config: DockyardConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", self.path.display()))?;
        Ok(config)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
