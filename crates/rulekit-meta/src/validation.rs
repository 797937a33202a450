//! Selection validation against the tool registry

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::tools::{ToolCatalog, ToolRegistry};

/// Error reported when a selection is not a list of tool keys.
pub const NOT_A_LIST: &str = "Selection must be a list of tool keys";

/// Outcome of validating a selection.
///
/// Invalid selections are a value, not an error: callers render the
/// messages themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
        }
    }
}

/// Check `selection` against a registry snapshot.
///
/// Every unknown key is collected (first occurrence order, no repeats)
/// into one `Invalid tools: ...` message.
pub fn check_selection<S: AsRef<str>>(catalog: &ToolCatalog, selection: &[S]) -> ValidationReport {
    let mut unknown: Vec<&str> = Vec::new();
    for key in selection.iter().map(AsRef::as_ref) {
        if !catalog.contains(key) && !unknown.contains(&key) {
            unknown.push(key);
        }
    }

    if unknown.is_empty() {
        ValidationReport::valid()
    } else {
        ValidationReport::invalid(format!("Invalid tools: {}", unknown.join(", ")))
    }
}

/// Validates selections against the current registry.
///
/// Each call reads the registry again; nothing is mutated.
#[derive(Debug, Clone)]
pub struct SelectionValidator {
    registry: ToolRegistry,
}

impl SelectionValidator {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Validate a typed selection.
    ///
    /// # Errors
    ///
    /// Fails only when the registry itself cannot be loaded.
    pub fn validate<S: AsRef<str>>(&self, selection: &[S]) -> Result<ValidationReport> {
        let catalog = self.registry.snapshot()?;
        Ok(check_selection(&catalog, selection))
    }

    /// Validate an untyped selection, e.g. one decoded from JSON.
    ///
    /// Anything other than an array of strings yields exactly one error.
    pub fn validate_value(&self, selection: &Value) -> Result<ValidationReport> {
        let keys: Option<Vec<&str>> = selection
            .as_array()
            .and_then(|items| items.iter().map(Value::as_str).collect());

        match keys {
            Some(keys) => self.validate(keys.as_slice()),
            None => Ok(ValidationReport::invalid(NOT_A_LIST)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TemplatesConfig, ToolEntry};

    fn catalog(keys: &[&str]) -> ToolCatalog {
        let mut config = TemplatesConfig::default();
        for key in keys {
            config.tools.insert(
                key.to_string(),
                ToolEntry {
                    name: key.to_string(),
                    description: String::new(),
                },
            );
        }
        ToolCatalog::from_config(&config)
    }

    #[test]
    fn test_known_keys_are_valid() {
        let report = check_selection(&catalog(&["a", "b"]), &["a", "b", "a"]);
        assert_eq!(report, ValidationReport::valid());
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let empty: [&str; 0] = [];
        assert!(check_selection(&catalog(&["a"]), &empty).valid);
    }

    #[test]
    fn test_unknown_keys_aggregate_into_one_message() {
        let report = check_selection(&catalog(&["a"]), &["x", "a", "y", "x"]);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Invalid tools: x, y".to_string()]);
    }

    #[test]
    fn test_single_unknown_key() {
        let report = check_selection(&catalog(&["a"]), &["unknown"]);
        assert_eq!(report.errors, vec!["Invalid tools: unknown".to_string()]);
    }
}
