//! Integration tests for the install command

use assert_cmd::Command;
use predicates::prelude::*;
use rulekit_test_utils::TestTemplates;

fn rulekit_cmd(t: &TestTemplates) -> Command {
    let mut cmd = Command::cargo_bin("rulekit").expect("Failed to find rulekit binary");
    cmd.env("NO_COLOR", "1")
        .env("RULEKIT_TEMPLATES", t.templates_root());
    cmd
}

fn templates() -> TestTemplates {
    let mut t = TestTemplates::new();
    t.tool("a", "Tool A", "")
        .tool("b", "Tool B", "")
        .tool("c", "Tool C", "")
        .document("a", "one.md", "# One\n\nProject {{ project_name }}\n")
        .document("a", "two.md", "---\nalwaysApply: true\n---\n# Two\n\n{{ team }}\n")
        .empty_bundle("b")
        .write_config();
    t
}

#[test]
fn test_install_scenario() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "a", "b", "c", "a", "--project", "acme", "--dest"])
        .arg(t.dest_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed 4 document(s)"))
        .stdout(predicate::str::contains("bundle missing"));

    assert_eq!(t.dest_entries(".cursor/rules"), vec!["a", "b"]);
    assert_eq!(t.dest_entries(".cursor/rules/a"), vec!["one.mdc", "two.mdc"]);
    assert!(t.read_dest(".cursor/rules/a/one.mdc").contains("Project acme"));
}

#[test]
fn test_install_with_variables() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "a", "--var", "team=Platform", "--dest"])
        .arg(t.dest_root())
        .assert()
        .success();

    let two = t.read_dest(".cursor/rules/a/two.mdc");
    assert!(two.starts_with("---\ndescription: Two\nglobs:\nalwaysApply: true\n---\n"));
    assert!(two.ends_with("Platform\n"));
}

#[test]
fn test_install_unknown_tool_is_refused() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "a", "ghost", "--dest"])
        .arg(t.dest_root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid tools: ghost"))
        .stderr(predicate::str::contains("--force"));

    t.assert_dest_not_exists(".cursor");
}

#[test]
fn test_install_force_skips_unknown() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "ghost", "--force", "--dest"])
        .arg(t.dest_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed 0 document(s)"))
        .stdout(predicate::str::contains("unknown tool"));

    t.assert_dest_exists(".cursor/rules");
    assert!(t.dest_entries(".cursor/rules").is_empty());
}

#[test]
fn test_install_dry_run() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "a", "c", "--dry-run", "--dest"])
        .arg(t.dest_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("one.mdc"))
        .stdout(predicate::str::contains("two.mdc"))
        .stdout(predicate::str::contains("Would write 2 document(s)"));

    t.assert_dest_not_exists(".cursor");
}

#[test]
fn test_install_reports_transcode_failure() {
    let mut t = templates();
    t.document("c", "broken.md", "---\nglobs: [unterminated\n---\nBody\n");
    rulekit_cmd(&t)
        .args(["install", "c", "--dest"])
        .arg(t.dest_root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("broken.md"))
        .stderr(predicate::str::contains("'c'"));
}

#[test]
fn test_install_rejects_malformed_var() {
    let t = templates();
    rulekit_cmd(&t)
        .args(["install", "a", "--var", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}
