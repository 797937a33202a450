//! Integration tests for the list-tools and validate commands

use assert_cmd::Command;
use predicates::prelude::*;
use rulekit_test_utils::TestTemplates;

/// Get a Command for the rulekit binary pointed at `t`'s templates root
fn rulekit_cmd(t: &TestTemplates) -> Command {
    let mut cmd = Command::cargo_bin("rulekit").expect("Failed to find rulekit binary");
    cmd.env_remove("RULEKIT_TEMPLATES")
        .env("NO_COLOR", "1")
        .arg("--templates")
        .arg(t.templates_root());
    cmd
}

fn templates() -> TestTemplates {
    let mut t = TestTemplates::new();
    t.tool("python", "Python", "Python coding rules")
        .tool("rust", "Rust", "Rust coding rules")
        .write_config();
    t
}

// ============================================================================
// list-tools Command Tests
// ============================================================================

#[test]
fn test_list_tools_shows_output() {
    let t = templates();
    rulekit_cmd(&t)
        .arg("list-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Tools"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("Rust coding rules"));
}

#[test]
fn test_list_tools_shows_total_count() {
    let t = templates();
    rulekit_cmd(&t)
        .arg("list-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:"))
        .stdout(predicate::str::contains("2 tools available"));
}

#[test]
fn test_list_tools_json() {
    let t = templates();
    let output = rulekit_cmd(&t)
        .args(["list-tools", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tools: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["python", "rust"]);
}

#[test]
fn test_list_tools_sees_config_edits() {
    let mut t = templates();
    rulekit_cmd(&t)
        .arg("list-tools")
        .assert()
        .stdout(predicate::str::contains("Go").not());

    t.tool("go", "Go", "").write_config();

    rulekit_cmd(&t)
        .arg("list-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("Go"))
        .stdout(predicate::str::contains("3 tools available"));
}

#[test]
fn test_list_tools_without_config_fails() {
    let t = TestTemplates::new();
    rulekit_cmd(&t)
        .arg("list-tools")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_list_tools_help() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["list-tools", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List"))
        .stdout(predicate::str::contains("tool"));
}

// ============================================================================
// validate Command Tests
// ============================================================================

#[test]
fn test_validate_known_tools() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["validate", "python", "rust", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_aggregates_unknown_tools() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["validate", "cobol", "python", "fortran", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid tools: cobol, fortran"));
}

#[test]
fn test_validate_json_selection() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["validate", "--json", r#"["rust"]"#])
        .assert()
        .success();
}

#[test]
fn test_validate_json_non_list() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["validate", "--json", r#"{"tools": ["rust"]}"#])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Selection must be a list of tool keys"));
}
