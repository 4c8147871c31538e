//! Integration tests for the dockyard CLI skeleton
//!
//! These tests verify the command table and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn dockyard() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockyard"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    dockyard().assert().code(2).stderr(predicate::str::contains(
        "Local containerized development projects",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    dockyard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("restart"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    dockyard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dockyard"));
}

#[test]
fn test_restart_help_describes_command() {
    dockyard()
        .args(["restart", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restart a project or several projects"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("[PROJECTS]..."));
}

// --- Argument parsing ---

#[test]
fn test_unknown_command_fails() {
    dockyard()
        .arg("reboot")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_restart_short_all_flag_is_accepted() {
    dockyard()
        .args(["restart", "-a", "--help"])
        .assert()
        .success();
}

#[test]
fn test_verbose_is_global() {
    dockyard()
        .args(["restart", "-vv", "--help"])
        .assert()
        .success();
}
