//! Filesystem primitives for rulekit
//!
//! Provides normalized paths, the async existence/directory/listing
//! operations the materialization engine suspends on, atomic writes,
//! and format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod ops;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use ops::{ensure_dir, exists, list_documents};
pub use path::{NormalizedPath, validate_path_identifier};
