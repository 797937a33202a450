//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a failed write never leaves a partial
/// file under the final name. The parent directory must already exist;
/// callers own directory creation.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

        temp_file
            .write_all(content)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

        temp_file.unlock().map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    })();

    if result.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!("Failed to remove temp file {:?}: {}", temp_path, e);
        }
    }

    result
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
