//! Isolated `DOCKYARD_HOME` sandboxes for end-to-end runs.
//!
//! The docker binary is replaced with `true` or `false` from `PATH`, so the
//! full restart pipeline runs without a daemon.

#![allow(clippy::expect_used, dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway home directory plus registered project roots.
pub struct Sandbox {
    home: TempDir,
    sites: TempDir,
}

impl Sandbox {
    /// Sandbox whose docker binary always succeeds.
    pub fn new(projects: &[&str]) -> Self {
        Self::with_docker("true", projects)
    }

    /// Sandbox whose docker binary is `docker`.
    pub fn with_docker(docker: &str, projects: &[&str]) -> Self {
        let home = TempDir::new().expect("home tempdir");
        let sites = TempDir::new().expect("sites tempdir");
        let sandbox = Self { home, sites };

        std::fs::write(
            sandbox.home.path().join("config.yaml"),
            format!("docker:\n  binary: \"{docker}\"\n  timeout_secs: 30\n"),
        )
        .expect("write config");

        let mut registry = String::new();
        for name in projects {
            let root = sandbox.root(name);
            std::fs::create_dir_all(root.join("web")).expect("create approot");
            writeln!(registry, "- name: {name}\n  approot: \"{}\"", root.display())
                .expect("format registry");
        }
        std::fs::write(sandbox.home.path().join("projects.yaml"), registry)
            .expect("write registry");
        sandbox
    }

    /// Replace the docker binary with a shell script. Every invocation is
    /// appended to `docker.log` in the sandbox home before `body` runs.
    #[cfg(unix)]
    pub fn use_docker_script(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt as _;

        let script = self.home.path().join("docker.sh");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho \"$*\" >> \"$DOCKYARD_HOME/docker.log\"\n{body}\n"),
        )
        .expect("write docker script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod docker script");
        std::fs::write(
            self.home.path().join("config.yaml"),
            format!(
                "docker:\n  binary: \"{}\"\n  timeout_secs: 30\n",
                script.display()
            ),
        )
        .expect("write config");
    }

    /// Arguments of every docker script invocation, in order.
    pub fn docker_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.home.path().join("docker.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Overwrite the registry with raw YAML.
    pub fn write_registry(&self, yaml: &str) {
        std::fs::write(self.home.path().join("projects.yaml"), yaml).expect("write registry");
    }

    /// Directory holding project roots, with symlinks resolved.
    pub fn sites(&self) -> PathBuf {
        self.sites.path().canonicalize().expect("canonical sites dir")
    }

    /// Absolute root of a project, with symlinks resolved.
    pub fn root(&self, name: &str) -> PathBuf {
        self.sites().join(name)
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// `dockyard` bound to this sandbox, running from `cwd`.
    pub fn dockyard_in(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockyard"));
        cmd.env("NO_COLOR", "1")
            .env("DOCKYARD_HOME", self.home.path())
            .env_remove("DOCKYARD_CONFIG")
            .env_remove("DOCKYARD_LOG")
            .current_dir(cwd);
        cmd
    }

    /// `dockyard` bound to this sandbox, running from outside every project.
    pub fn dockyard(&self) -> Command {
        self.dockyard_in(self.home.path())
    }
}
