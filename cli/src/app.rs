//! Application context — unified state passed to every command handler.
//!
//! `AppContext` owns the output context, the loaded configuration, the
//! process runner and the registry, and hands out the port implementations
//! commands wire into application services.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::DockyardConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::docker::DockerNetwork;
use crate::infra::registry::{RegistryResolver, YamlProjectRegistry};
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext`.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Configuration loaded from `config.yaml` (or defaults).
    pub config: DockyardConfig,
    /// Runs docker CLI processes with the configured timeout.
    pub runner: TokioCommandRunner,
    /// Registered projects.
    pub registry: YamlProjectRegistry,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// configuration file is unreadable or invalid.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let store = YamlConfigStore::new()?;
        let config = store.load().context("loading configuration")?;
        tracing::debug!(path = %store.path().display(), ?config, "configuration loaded");
        let registry = YamlProjectRegistry::new()?;
        Ok(Self::with_parts(flags, config, registry))
    }

    /// Assemble a context from already-loaded parts.
    #[must_use]
    pub fn with_parts(flags: &AppFlags, config: DockyardConfig, registry: YamlProjectRegistry) -> Self {
        let runner = TokioCommandRunner::new(Duration::from_secs(config.docker.timeout_secs));
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config,
            runner,
            registry,
        }
    }

    /// Progress reporter writing to the terminal.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// The shared container network named in the configuration.
    #[must_use]
    pub fn network(&self) -> DockerNetwork<'_, TokioCommandRunner> {
        DockerNetwork::new(
            &self.runner,
            &self.config.docker.binary,
            &self.config.network.name,
        )
    }

    /// Resolver over the registry; `cwd` picks the project when none is named.
    #[must_use]
    pub fn resolver(
        &self,
        cwd: PathBuf,
    ) -> RegistryResolver<'_, YamlProjectRegistry, TokioCommandRunner> {
        RegistryResolver::new(&self.registry, &self.runner, &self.config, cwd)
    }
}
