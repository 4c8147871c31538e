//! `ContainerNetwork` port backed by `docker network`.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ContainerNetwork, NetworkStatus};

/// The shared bridge network, created on demand.
pub struct DockerNetwork<'a, R> {
    runner: &'a R,
    docker: &'a str,
    name: &'a str,
}

impl<'a, R: CommandRunner> DockerNetwork<'a, R> {
    pub fn new(runner: &'a R, docker: &'a str, name: &'a str) -> Self {
        Self {
            runner,
            docker,
            name,
        }
    }
}

impl<R: CommandRunner> ContainerNetwork for DockerNetwork<'_, R> {
    async fn ensure_network(&self) -> Result<NetworkStatus> {
        let name = self.name;
        let inspect = self
            .runner
            .run(self.docker, &["network", "inspect", name])
            .await
            .with_context(|| format!("inspecting network {name}"))?;
        if inspect.status.success() {
            tracing::debug!(network = name, "network already present");
            return Ok(NetworkStatus::AlreadyPresent);
        }

        let create = self
            .runner
            .run(self.docker, &["network", "create", name])
            .await
            .with_context(|| format!("creating network {name}"))?;
        if create.status.success() {
            tracing::info!(network = name, "created network");
            return Ok(NetworkStatus::Created);
        }

        let stderr = String::from_utf8_lossy(&create.stderr);
        // Another invocation may have created it between inspect and create.
        if stderr.contains("already exists") {
            tracing::debug!(network = name, "network created concurrently");
            return Ok(NetworkStatus::AlreadyPresent);
        }
        anyhow::bail!(
            "docker network create {name} exited with {}: {}",
            create.status,
            stderr.trim()
        )
    }
}
