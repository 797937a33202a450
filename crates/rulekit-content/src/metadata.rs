//! Run metadata handed to the transcoder

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Name reported as the generator of written documents.
pub const GENERATOR: &str = concat!("rulekit ", env!("CARGO_PKG_VERSION"));

/// Context for one materialization run.
///
/// The engine forwards this untouched; only the transcoder reads it, to
/// fill template placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub project_name: String,
    pub generator: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl RunMetadata {
    /// Metadata stamped with the current time.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self::at(project_name, Utc::now())
    }

    /// Metadata with a fixed timestamp, for reproducible output.
    pub fn at(project_name: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            project_name: project_name.into(),
            generator: GENERATOR.to_string(),
            generated_at,
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Resolve a placeholder name.
    ///
    /// Built-in names take precedence over user variables.
    pub fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "project_name" => Some(self.project_name.clone()),
            "generator" => Some(self.generator.clone()),
            "generated_at" => Some(
                self.generated_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            _ => self.variables.get(name).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> RunMetadata {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        RunMetadata::at("demo", at)
    }

    #[test]
    fn test_builtin_lookups() {
        let meta = fixed();
        assert_eq!(meta.lookup("project_name").as_deref(), Some("demo"));
        assert_eq!(meta.lookup("generator").as_deref(), Some(GENERATOR));
        assert_eq!(
            meta.lookup("generated_at").as_deref(),
            Some("2024-05-01T12:30:00Z")
        );
    }

    #[test]
    fn test_variables_do_not_shadow_builtins() {
        let meta = fixed()
            .with_variable("project_name", "other")
            .with_variable("language", "rust");
        assert_eq!(meta.lookup("project_name").as_deref(), Some("demo"));
        assert_eq!(meta.lookup("language").as_deref(), Some("rust"));
        assert_eq!(meta.lookup("missing"), None);
    }
}
