//! Error types for rulekit-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] rulekit_fs::Error),

    #[error("Configuration not found in {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Config file too large: {path} is {size} bytes (max {max})")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },
}
