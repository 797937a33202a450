//! Integration tests for the tool registry accessor and selection validator

use pretty_assertions::assert_eq;
use rulekit_meta::validation::NOT_A_LIST;
use rulekit_meta::{Error, SelectionValidator, ToolDescriptor, ToolRegistry, ValidationReport};
use rulekit_test_utils::TestTemplates;
use serde_json::json;

fn descriptor(key: &str, name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        key: key.into(),
        name: name.into(),
        description: description.into(),
    }
}

#[test]
fn test_list_tools_sorted_by_key() {
    let mut t = TestTemplates::new();
    t.tool("rust", "Rust", "Rust rules")
        .tool("go", "Go", "Go rules")
        .write_config();

    let tools = ToolRegistry::new(t.templates_root()).list_tools().unwrap();

    assert_eq!(
        tools,
        vec![
            descriptor("go", "Go", "Go rules"),
            descriptor("rust", "Rust", "Rust rules"),
        ]
    );
}

#[test]
fn test_list_tools_sees_edits_between_calls() {
    let mut t = TestTemplates::new();
    t.tool("go", "Go", "").write_config();
    let registry = ToolRegistry::new(t.templates_root());

    assert_eq!(registry.list_tools().unwrap().len(), 1);

    t.tool("rust", "Rust", "").write_config();

    let keys: Vec<_> = registry
        .list_tools()
        .unwrap()
        .into_iter()
        .map(|d| d.key)
        .collect();
    assert_eq!(keys, vec!["go", "rust"]);
}

#[test]
fn test_list_tools_propagates_config_errors() {
    let t = TestTemplates::new();
    t.write_raw_config("rulekit.toml", "tools = 3\n");

    let result = ToolRegistry::new(t.templates_root()).list_tools();

    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_validate_all_known() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").tool("b", "B", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    let report = validator.validate(&["a", "b", "a"]).unwrap();

    assert_eq!(report, ValidationReport::valid());
}

#[test]
fn test_validate_unknown_only() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    let report = validator.validate(&["unknown"]).unwrap();

    assert!(!report.valid);
    assert_eq!(report.errors, vec!["Invalid tools: unknown"]);
}

#[test]
fn test_validate_collects_every_unknown_key() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    let report = validator.validate(&["x", "a", "y", "z"]).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0], "Invalid tools: x, y, z");
}

#[test]
fn test_validate_is_idempotent() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    let first = validator.validate(&["a", "nope"]).unwrap();
    let second = validator.validate(&["a", "nope"]).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_validate_value_rejects_non_lists() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    for value in [json!("a"), json!({"a": true}), json!(null), json!(["a", 1])] {
        let report = validator.validate_value(&value).unwrap();
        assert!(!report.valid, "{} should be invalid", value);
        assert_eq!(report.errors, vec![NOT_A_LIST]);
    }
}

#[test]
fn test_validate_value_accepts_string_arrays() {
    let mut t = TestTemplates::new();
    t.tool("a", "A", "").write_config();
    let validator = SelectionValidator::new(ToolRegistry::new(t.templates_root()));

    assert!(validator.validate_value(&json!(["a"])).unwrap().valid);
    assert_eq!(
        validator.validate_value(&json!(["a", "b"])).unwrap().errors,
        vec!["Invalid tools: b"]
    );
}
