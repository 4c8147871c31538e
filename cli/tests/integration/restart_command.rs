//! End-to-end tests for `dockyard restart`.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::fixture::Sandbox;

#[test]
fn test_restart_named_projects_in_order() {
    let sandbox = Sandbox::new(&["siteA", "siteB"]);

    let output = sandbox
        .dockyard()
        .args(["restart", "siteA", "siteB"])
        .output()
        .expect("run dockyard");
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find("Restarting project siteA...").expect("siteA step");
    let b = stdout.find("Restarting project siteB...").expect("siteB step");
    assert!(a < b, "siteA must restart before siteB:\n{stdout}");
    assert!(stdout.contains("Restarted siteA"), "{stdout}");
    assert!(stdout.contains("Restarted siteB"), "{stdout}");
    assert!(
        stdout.contains("Your project can be reached at https://siteA.dockyard.site, http://siteA.dockyard.site"),
        "{stdout}"
    );
}

#[test]
fn test_restart_all_restarts_every_project() {
    let sandbox = Sandbox::new(&["shop", "blog"]);

    sandbox
        .dockyard()
        .args(["restart", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restarted blog"))
        .stdout(predicate::str::contains("Restarted shop"));
}

#[test]
fn test_restart_without_names_uses_current_project() {
    let sandbox = Sandbox::new(&["siteA", "siteB"]);

    sandbox
        .dockyard_in(&sandbox.root("siteB").join("web"))
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restarted siteB"))
        .stdout(predicate::str::contains("siteA").not());
}

#[test]
fn test_restart_outside_any_project_fails() {
    let sandbox = Sandbox::new(&["siteA"]);

    sandbox
        .dockyard()
        .arg("restart")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to get project(s)"))
        .stderr(predicate::str::contains("No project selected"));
}

#[test]
fn test_restart_unknown_project_fails_before_any_stop() {
    let sandbox = Sandbox::new(&["siteA"]);

    sandbox
        .dockyard()
        .args(["restart", "siteA", "ghost"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Restarting").not())
        .stderr(predicate::str::contains("Project(s) not found: ghost"));
}

#[test]
fn test_restart_reports_network_failure() {
    let sandbox = Sandbox::with_docker("false", &["siteA"]);

    sandbox
        .dockyard()
        .args(["restart", "siteA"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Restarting").not())
        .stderr(predicate::str::contains(
            "Failed to ensure container network",
        ));
}

#[test]
fn test_restart_quiet_prints_nothing() {
    let sandbox = Sandbox::new(&["siteA"]);

    sandbox
        .dockyard()
        .args(["--quiet", "restart", "siteA"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_restart_rejects_invalid_registry() {
    let sandbox = Sandbox::new(&[]);
    sandbox.write_registry("- name: bad\n  approot: relative/path\n");

    sandbox
        .dockyard()
        .args(["restart", "bad"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot load project registry"));
}

#[test]
fn test_restart_succeeds_with_conventional_no_color_values() {
    let sandbox = Sandbox::new(&["siteA"]);

    for value in ["1", "true", "yes"] {
        sandbox
            .dockyard()
            .env("NO_COLOR", value)
            .args(["restart", "siteA"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Restarted siteA"))
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn test_restart_finds_project_registered_through_symlink() {
    let sandbox = Sandbox::new(&[]);
    let real = sandbox.sites().join("real").join("siteA");
    std::fs::create_dir_all(real.join("web")).expect("create approot");
    std::os::unix::fs::symlink(sandbox.sites().join("real"), sandbox.sites().join("link"))
        .expect("symlink");
    sandbox.write_registry(&format!(
        "- name: siteA\n  approot: \"{}\"\n",
        sandbox.sites().join("link").join("siteA").display()
    ));

    sandbox
        .dockyard_in(&real.join("web"))
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restarted siteA"));
}

#[test]
fn test_restart_stop_failure_skips_later_projects() {
    let sandbox = Sandbox::new(&["siteA", "siteB"]);
    sandbox.use_docker_script(
        r#"case "$*" in
  *" down"*) echo "container siteA is busy" >&2; exit 1 ;;
esac
exit 0"#,
    );

    sandbox
        .dockyard()
        .args(["restart", "siteA", "siteB"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Restarting project siteB").not())
        .stderr(predicate::str::contains(
            "Failed to restart siteA: stop failed",
        ))
        .stderr(predicate::str::contains("container siteA is busy"));

    let calls = sandbox.docker_calls();
    assert!(calls[0].starts_with("network inspect"), "{calls:?}");
    assert!(calls.iter().all(|c| !c.contains("siteB")), "{calls:?}");
    assert!(calls.iter().all(|c| !c.ends_with("up -d")), "{calls:?}");
}

#[test]
fn test_restart_start_failure_reports_start_phase() {
    let sandbox = Sandbox::new(&["siteA", "siteB"]);
    sandbox.use_docker_script(
        r#"case "$*" in
  *" up -d") echo "port 443 already allocated" >&2; exit 1 ;;
esac
exit 0"#,
    );

    sandbox
        .dockyard()
        .args(["restart", "siteA", "siteB"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Restarted siteA").not())
        .stderr(predicate::str::contains(
            "Failed to restart siteA: start failed",
        ))
        .stderr(predicate::str::contains("port 443 already allocated"));

    let calls = sandbox.docker_calls();
    assert_eq!(
        calls.iter().filter(|c| c.starts_with("network")).count(),
        1,
        "{calls:?}"
    );
    assert!(calls.iter().all(|c| !c.contains("siteB")), "{calls:?}");
}
