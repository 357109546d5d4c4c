//! End-to-end tests for the actionsmith binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn actionsmith(root: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_actionsmith"));
    cmd.env_remove("RUST_LOG")
        .env_remove("ACTIONSMITH_CONFIG")
        .arg("--root")
        .arg(root.path());
    cmd
}

#[test]
fn print_writes_default_workflow_to_stdout() {
    let root = TempDir::new().unwrap();

    actionsmith(&root)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# This file was automatically generated by actionsmith.",
        ))
        .stdout(predicate::str::contains("name: Continuous Integration\n"))
        .stdout(predicate::str::contains("run: sbt ++${{ matrix.scala }} test"));

    assert!(!root.path().join(".github").exists());
}

#[test]
fn generate_then_check() {
    let root = TempDir::new().unwrap();
    let workflow = root.path().join(".github/workflows/ci.yml");

    actionsmith(&root)
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Would create:"));
    assert!(!workflow.exists());

    actionsmith(&root)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workflow file not found"));

    actionsmith(&root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created:"));
    assert!(workflow.exists());

    actionsmith(&root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Unchanged:"));

    actionsmith(&root)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Up to date:"));
}

#[test]
fn check_detects_stale_workflow() {
    let root = TempDir::new().unwrap();
    actionsmith(&root).arg("generate").assert().success();

    std::fs::write(
        root.path().join("actionsmith.toml"),
        "name = \"Renamed\"\n",
    )
    .unwrap();

    actionsmith(&root)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    actionsmith(&root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Updated:"));
}

#[test]
fn settings_file_controls_output_path() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join("custom.toml"),
        "file-name = \"build\"\npublish-target-branches = []\n",
    )
    .unwrap();

    actionsmith(&root)
        .args(["--config", "custom.toml", "generate"])
        .assert()
        .success();

    let content =
        std::fs::read_to_string(root.path().join(".github/workflows/build.yml")).unwrap();
    assert!(content.contains("  build:\n"));
    assert!(!content.contains("  publish:\n"));
}

#[test]
fn invalid_settings_fail_with_diagnostic() {
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("actionsmith.toml"), "oses = []\n").unwrap();

    actionsmith(&root)
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("oses must list at least one runner"));
}

#[test]
fn unknown_settings_field_is_rejected() {
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("actionsmith.toml"), "sbt-command = \"sbt\"\n").unwrap();

    actionsmith(&root)
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}
