//! Domain types and validators for Dockyard configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.dockyard/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DockyardConfig {
    /// Shared container network settings.
    pub network: NetworkConfig,
    /// Hostname and port settings used to build project URLs.
    pub router: RouterConfig,
    /// Docker CLI settings.
    pub docker: DockerConfig,
}

/// Shared network every project container joins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    pub name: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "dockyard_default".to_string(),
        }
    }
}

/// Router settings: projects are served at `<host>.<tld>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    pub tld: String,
    pub http_port: u16,
    pub https_port: u16,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            tld: "dockyard.site".to_string(),
            http_port: 80,
            https_port: 443,
        }
    }
}

/// Docker CLI binary and per-invocation timeout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DockerConfig {
    pub binary: String,
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            timeout_secs: 300,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

impl DockyardConfig {
    /// Reject values that would make every docker call fail.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &'static str, reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidValue {
                key,
                reason: reason.to_string(),
            })
        };
        if self.network.name.trim().is_empty() {
            return invalid("network.name", "must not be empty");
        }
        if self.network.name.chars().any(char::is_whitespace) {
            return invalid("network.name", "must not contain whitespace");
        }
        if self.router.tld.trim().is_empty() {
            return invalid("router.tld", "must not be empty");
        }
        if self.router.http_port == 0 {
            return invalid("router.http_port", "must be between 1 and 65535");
        }
        if self.router.https_port == 0 {
            return invalid("router.https_port", "must be between 1 and 65535");
        }
        if self.docker.binary.trim().is_empty() {
            return invalid("docker.binary", "must not be empty");
        }
        if self.docker.timeout_secs == 0 {
            return invalid("docker.timeout_secs", "must be greater than zero");
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
