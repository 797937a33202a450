//! Configuration types for a templates root
//!
//! A templates root carries one configuration file (`rulekit.toml`, or its
//! YAML/JSON equivalent) describing the known tools, where their bundles
//! live, and how documents are rewritten:
//!
//! ```toml
//! [tools.python]
//! name = "Python"
//! description = "Python style and tooling rules"
//!
//! [layout]
//! bundles_dir = "rules"
//! output_dir = ".cursor/rules"
//! source_extension = "md"
//! target_extension = "mdc"
//!
//! [transcode]
//! always_apply = false
//! default_globs = ["**/*.py"]
//! header = "Generated by {{ generator }} for {{ project_name }}"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed templates configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Known tools, keyed by tool key
    #[serde(default)]
    pub tools: BTreeMap<String, ToolEntry>,
    /// Where bundles are read from and documents are written to
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Front matter defaults handed to the transcoder
    #[serde(default)]
    pub transcode: TranscodeConfig,
}

/// One tool as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Human-readable display name
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Directory and extension layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory under the templates root holding one bundle per tool key
    #[serde(default = "default_bundles_dir")]
    pub bundles_dir: String,
    /// Shared sub-root under the destination root for all tool outputs
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Extension of source documents, without the leading dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extension of written documents, without the leading dot
    #[serde(default = "default_target_extension")]
    pub target_extension: String,
}

fn default_bundles_dir() -> String {
    "rules".to_string()
}

fn default_output_dir() -> String {
    ".cursor/rules".to_string()
}

fn default_source_extension() -> String {
    "md".to_string()
}

fn default_target_extension() -> String {
    "mdc".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bundles_dir: default_bundles_dir(),
            output_dir: default_output_dir(),
            source_extension: default_source_extension(),
            target_extension: default_target_extension(),
        }
    }
}

/// Defaults applied when a source document's front matter is silent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranscodeConfig {
    /// `alwaysApply` value for documents that do not set one
    #[serde(default)]
    pub always_apply: bool,
    /// `globs` for documents that do not set any
    #[serde(default)]
    pub default_globs: Vec<String>,
    /// Template placed between the front matter and the body
    #[serde(default)]
    pub header: Option<String>,
}

impl TemplatesConfig {
    /// Sorted tool keys.
    pub fn tool_keys(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.bundles_dir, "rules");
        assert_eq!(layout.output_dir, ".cursor/rules");
        assert_eq!(layout.source_extension, "md");
        assert_eq!(layout.target_extension, "mdc");
    }

    #[test]
    fn test_transcode_defaults() {
        let transcode = TranscodeConfig::default();
        assert!(!transcode.always_apply);
        assert!(transcode.default_globs.is_empty());
        assert!(transcode.header.is_none());
    }

    #[test]
    fn test_tool_keys_sorted() {
        let mut config = TemplatesConfig::default();
        for key in ["rust", "go", "python"] {
            config.tools.insert(
                key.into(),
                ToolEntry {
                    name: key.to_uppercase(),
                    description: String::new(),
                },
            );
        }
        assert_eq!(config.tool_keys(), vec!["go", "python", "rust"]);
    }
}
