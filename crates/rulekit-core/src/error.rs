//! Error types for rulekit-core

/// Result type for rulekit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a materialization run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document could not be transcoded
    #[error("Failed to transcode '{document}' for tool '{tool}': {source}")]
    Transcode {
        tool: String,
        document: String,
        #[source]
        source: rulekit_content::Error,
    },

    /// The destination directory for a tool could not be created
    #[error("Failed to create output directory for tool '{tool}': {source}")]
    Directory {
        tool: String,
        #[source]
        source: rulekit_fs::Error,
    },

    /// A tool's bundle could not be inspected or listed
    #[error("Failed to read bundle for tool '{tool}': {source}")]
    Bundle {
        tool: String,
        #[source]
        source: rulekit_fs::Error,
    },

    /// A blocking task was cancelled or panicked
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from rulekit-fs
    #[error(transparent)]
    Fs(#[from] rulekit_fs::Error),

    /// Configuration error from rulekit-meta
    #[error(transparent)]
    Meta(#[from] rulekit_meta::Error),
}
