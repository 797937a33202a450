//! Loader for the templates configuration file
//!
//! The configuration lives directly in the templates root:
//!
//! ```text
//! templates/
//!   rulekit.toml
//!   rules/
//!     python/
//!       style.md
//!       testing.md
//!     rust/
//!       errors.md
//! ```

use std::fs;

use crate::config::TemplatesConfig;
use crate::{Error, Result};
use rulekit_fs::{ConfigStore, NormalizedPath, validate_path_identifier};

/// Candidate configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "rulekit.toml",
    "rulekit.yaml",
    "rulekit.yml",
    "rulekit.json",
];

/// Largest configuration file the loader will read (1 MiB).
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Loads [`TemplatesConfig`] from a templates root.
///
/// Nothing is cached: every [`ConfigLoader::load`] reads the file again.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: NormalizedPath,
    store: ConfigStore,
}

impl ConfigLoader {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            store: ConfigStore::new(),
        }
    }

    /// The templates root this loader reads from.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Locate the configuration file, if any.
    pub fn config_path(&self) -> Option<NormalizedPath> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.to_native().is_file())
    }

    /// Read and parse the configuration file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] when no candidate file exists
    /// - [`Error::ConfigTooLarge`] above [`MAX_CONFIG_SIZE`]
    /// - [`Error::InvalidConfig`] when the file does not parse into the
    ///   expected shape, or declares unusable keys or extensions
    pub fn load(&self) -> Result<TemplatesConfig> {
        let path = self.config_path().ok_or_else(|| Error::ConfigNotFound {
            path: self.root.to_native(),
        })?;

        let size = fs::metadata(path.to_native())
            .map_err(|e| rulekit_fs::Error::io(path.to_native(), e))?
            .len();
        if size > MAX_CONFIG_SIZE {
            return Err(Error::ConfigTooLarge {
                path: path.to_native(),
                size,
                max: MAX_CONFIG_SIZE,
            });
        }

        let config: TemplatesConfig = self.store.load(&path).map_err(|e| match e {
            rulekit_fs::Error::ConfigParse { message, .. } => Error::InvalidConfig {
                path: path.to_native(),
                message,
            },
            other => Error::Fs(other),
        })?;

        check_config(&path, &config)?;
        tracing::debug!(
            "Loaded {} tool(s) from {}",
            config.tools.len(),
            path.as_str()
        );
        Ok(config)
    }
}

/// Reject configurations the engine could not act on safely.
fn check_config(path: &NormalizedPath, config: &TemplatesConfig) -> Result<()> {
    let invalid = |message: String| Error::InvalidConfig {
        path: path.to_native(),
        message,
    };

    for key in config.tools.keys() {
        validate_path_identifier(key, "Tool key").map_err(invalid)?;
    }

    let layout = &config.layout;
    for (label, ext) in [
        ("source_extension", &layout.source_extension),
        ("target_extension", &layout.target_extension),
    ] {
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(invalid(format!(
                "layout.{} must be a bare extension such as \"md\", got {:?}",
                label, ext
            )));
        }
    }

    Ok(())
}
