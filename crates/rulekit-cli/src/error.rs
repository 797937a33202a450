//! Error types for rulekit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from rulekit-core
    #[error(transparent)]
    Core(#[from] rulekit_core::Error),

    /// Error from rulekit-meta
    #[error(transparent)]
    Meta(#[from] rulekit_meta::Error),

    /// JSON encoding or decoding error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
