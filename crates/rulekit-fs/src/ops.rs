//! Async filesystem operations
//!
//! These are the suspension points of a materialization run: existence
//! checks on source bundles, directory creation on the destination side,
//! and bundle listings.

use std::io::ErrorKind;

use tokio::fs;

use crate::{Error, NormalizedPath, Result};

/// Check whether `path` exists.
///
/// Absence is reported as `Ok(false)`. Any other failure to inspect the
/// path is an [`Error::Access`].
pub async fn exists(path: &NormalizedPath) -> Result<bool> {
    match fs::metadata(path.to_native()).await {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::access(path.to_native(), e)),
    }
}

/// Create `path` and all missing parents.
///
/// Succeeds silently when the directory is already present.
pub async fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::create_dir_all(&native)
        .await
        .map_err(|e| Error::io(&native, e))
}

/// List the regular files directly inside `dir` whose extension equals
/// `extension` (case-sensitive, without the leading dot).
///
/// Symlinks are followed; a link whose target is missing is skipped.
///
/// Results are sorted by file name so callers see a stable order.
pub async fn list_documents(dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let mut entries = fs::read_dir(&native)
        .await
        .map_err(|e| Error::io(&native, e))?;

    let mut documents = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io(&native, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io(entry.path(), e))?;
        let is_file = if file_type.is_symlink() {
            match fs::metadata(entry.path()).await {
                Ok(target) => target.is_file(),
                Err(e) if e.kind() == ErrorKind::NotFound => false,
                Err(e) => return Err(Error::io(entry.path(), e)),
            }
        } else {
            file_type.is_file()
        };
        if !is_file {
            continue;
        }

        let candidate = NormalizedPath::new(entry.path());
        if candidate.extension() == Some(extension) {
            documents.push(candidate);
        }
    }

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(documents)
}
