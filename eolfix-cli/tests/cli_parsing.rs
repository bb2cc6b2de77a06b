//! CLI argument and trigger-gate tests.
//!
//! None of these reach the network: the wrong-trigger paths return before
//! any API call, and the one failing-run test points the API base at an
//! unroutable address.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn eolfix() -> Command {
    Command::cargo_bin("eolfix").expect("eolfix binary")
}

/// A command with every required input bound, pointing at a throwaway
/// workspace and event payload.
fn configured(temp: &TempDir, event_name: &str, payload: &str) -> Command {
    let event_path = temp.path().join("event.json");
    fs::write(&event_path, payload).expect("write event payload");

    let mut cmd = eolfix();
    cmd.env_clear()
        .env("GITHUB_WORKSPACE", temp.path())
        .env("GITHUB_TOKEN", "test-token")
        .env("GITHUB_EVENT_PATH", &event_path)
        .env("GITHUB_EVENT_NAME", event_name)
        .env("GITHUB_REPOSITORY", "octocat/hello-world")
        .env("GITHUB_API_URL", "http://127.0.0.1:1");
    cmd
}

#[test]
fn help_names_the_tool() {
    eolfix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eolfix"))
        .stdout(predicate::str::contains("--workspace-root"));
}

#[test]
fn version_flag_works() {
    eolfix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("eolfix"));
}

#[test]
fn missing_required_inputs_fail_parsing() {
    eolfix()
        .env_clear()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--workspace-root"));
}

#[test]
fn malformed_repository_coordinates_fail_parsing() {
    let temp = TempDir::new().expect("temp dir");
    configured(&temp, "pull_request", "{}")
        .env("GITHUB_REPOSITORY", "not-a-repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner/repo"));
}

#[test]
fn non_pull_request_event_exits_cleanly() {
    let temp = TempDir::new().expect("temp dir");
    configured(&temp, "push", "{}").assert().success();
}

#[test]
fn non_trigger_action_exits_cleanly() {
    let temp = TempDir::new().expect("temp dir");
    configured(
        &temp,
        "pull_request",
        r#"{ "action": "closed", "pull_request": { "number": 3 } }"#,
    )
    .assert()
    .success();
}

#[test]
fn wrong_event_name_never_reads_the_payload() {
    let temp = TempDir::new().expect("temp dir");
    // The payload is malformed on purpose; the event-name gate comes first.
    configured(&temp, "push", "{ not json").assert().success();
}

#[test]
fn malformed_payload_fails_the_run() {
    let temp = TempDir::new().expect("temp dir");
    configured(&temp, "pull_request", "{ not json")
        .assert()
        .failure();
}

#[test]
fn payload_without_number_fails_the_run() {
    let temp = TempDir::new().expect("temp dir");
    configured(&temp, "pull_request", r#"{ "action": "opened" }"#)
        .assert()
        .failure();
}

#[test]
fn unreachable_api_fails_the_run() {
    let temp = TempDir::new().expect("temp dir");
    configured(
        &temp,
        "pull_request",
        r#"{ "action": "synchronize", "pull_request": { "number": 7 } }"#,
    )
    .assert()
    .failure();
}
