//! Error types for rulekit-content

/// Result type for rulekit-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while transcoding a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Invalid front matter field `{field}`: {message}")]
    InvalidField { field: String, message: String },

    #[error(transparent)]
    Fs(#[from] rulekit_fs::Error),

    #[error("Write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}
