// Integration tests for the motoscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the motoscore binary.
fn motoscore() -> Command {
    Command::cargo_bin("motoscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    motoscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("motoscore"));
}

#[test]
fn cli_help_flag() {
    motoscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("motorcycle ranking"));
}

#[test]
fn rank_requires_input() {
    motoscore()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn compare_requires_two_positions() {
    motoscore()
        .arg("compare")
        .arg("bikes.json")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_rejects_unknown_format() {
    motoscore()
        .arg("rank")
        .arg("bikes.json")
        .arg("--format")
        .arg("sarif")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rank_rejects_unknown_pillion_mode() {
    motoscore()
        .arg("rank")
        .arg("bikes.json")
        .arg("--pillion")
        .arg("always")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    motoscore()
        .arg("-q")
        .arg("-v")
        .arg("validate")
        .arg("bikes.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rank_missing_input_is_runtime_failure() {
    motoscore()
        .arg("rank")
        .arg("/nonexistent/bikes.json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn validate_missing_input_is_runtime_failure() {
    motoscore()
        .arg("validate")
        .arg("/nonexistent/bikes.json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}
