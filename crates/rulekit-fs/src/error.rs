//! Error types for rulekit-fs

use std::path::PathBuf;

/// Result type for rulekit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rulekit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path could not be inspected for a reason other than absence
    /// (permissions, broken mounts, ...).
    #[error("Cannot access {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }
}
