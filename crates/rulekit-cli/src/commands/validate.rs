//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use rulekit_meta::{SelectionValidator, ToolRegistry, ValidationReport};
use serde_json::Value;

use crate::error::{CliError, Result};

/// Exit status for a selection containing unknown tools.
pub const INVALID_SELECTION: u8 = 2;

/// Exit status for success.
pub const SUCCESS: u8 = 0;

/// Run the validate command on either positional keys or a JSON selection.
///
/// Returns the process exit status.
pub fn run_validate(templates: &Path, tools: &[String], json: Option<&str>) -> Result<u8> {
    let validator = SelectionValidator::new(ToolRegistry::new(templates));

    let report = match json {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw)
                .map_err(|e| CliError::user(format!("Invalid JSON selection: {}", e)))?;
            validator.validate_value(&value)?
        }
        None => validator.validate(tools)?,
    };

    if report.valid {
        println!("{}", "valid".green().bold());
        Ok(SUCCESS)
    } else {
        print_invalid(&report);
        Ok(INVALID_SELECTION)
    }
}

/// Print the aggregated validation errors to stderr.
pub fn print_invalid(report: &ValidationReport) {
    for error in &report.errors {
        eprintln!("{} {}", "invalid:".red().bold(), error);
    }
}
