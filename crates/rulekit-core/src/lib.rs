//! Materialization engine for rulekit
//!
//! This crate coordinates the lower layers into one operation: given a
//! selection of tool keys, write every document of each selected tool's
//! bundle into a destination tree, transcoded into the target format.
//!
//! ```text
//!                  rulekit-cli
//!                       |
//!                  rulekit-core
//!                       |
//!      +----------------+----------------+
//!      |                |                |
//! rulekit-fs      rulekit-meta     rulekit-content
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rulekit_core::MaterializationEngine;
//! use rulekit_content::RunMetadata;
//!
//! let engine = MaterializationEngine::mdc("templates");
//! let config = engine.load_config()?;
//! let count = engine
//!     .materialize(&"project".into(), &["python"], &RunMetadata::new("demo"), &config)
//!     .await?;
//! ```

pub mod engine;
pub mod error;
pub mod report;

pub use engine::{BATCH_SIZE, MaterializationEngine, destination_name};
pub use error::{Error, Result};
pub use report::{CopyPlan, MaterializeReport, PlannedTool, SkipReason, SkippedTool, ToolOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcode_error_names_tool_and_document() {
        let error = Error::Transcode {
            tool: "python".into(),
            document: "style.md".into(),
            source: rulekit_content::Error::parse("YAML", "bad indentation"),
        };

        let display = error.to_string();
        assert!(display.contains("python"), "got: {}", display);
        assert!(display.contains("style.md"), "got: {}", display);
        assert!(display.contains("bad indentation"), "got: {}", display);
    }
}
