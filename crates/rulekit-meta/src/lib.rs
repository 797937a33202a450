//! Template configuration and tool metadata for rulekit.
//!
//! This crate loads the templates configuration file, exposes the tool
//! registry built from it, and validates caller selections against that
//! registry.

pub mod config;
pub mod error;
pub mod loader;
pub mod tools;
pub mod validation;

pub use config::{LayoutConfig, TemplatesConfig, ToolEntry, TranscodeConfig};
pub use error::{Error, Result};
pub use loader::{CONFIG_FILE_NAMES, ConfigLoader, MAX_CONFIG_SIZE};
pub use tools::{ToolCatalog, ToolDescriptor, ToolRegistry};
pub use validation::{SelectionValidator, ValidationReport, check_selection};
