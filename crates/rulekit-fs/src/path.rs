//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Template roots, bundles and destination documents are all addressed
/// through this type so that names stay stable across platforms; the
/// platform-native form is produced only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with one or more `/`-separated segments.
    ///
    /// Empty segments and `.` are dropped, so joining `""` yields `self`.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let mut joined = self.inner.clone();
        for part in segment.split('/').filter(|p| !p.is_empty() && *p != ".") {
            if !joined.is_empty() && !joined.ends_with('/') {
                joined.push('/');
            }
            joined.push_str(part);
        }
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    ///
    /// Dotfiles such as `.hidden` have no extension.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }
}

/// Validate that an identifier is safe to use as a single path segment.
///
/// Tool keys become directory names on both the source and destination
/// side, so they must not be able to escape their parent directory.
pub fn validate_path_identifier(value: &str, label: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} must not be empty", label));
    }
    if value == "." || value == ".." {
        return Err(format!("{} '{}' is not a valid name", label, value));
    }
    if value.contains(['/', '\\']) {
        return Err(format!(
            "{} '{}' must not contain path separators",
            label, value
        ));
    }
    if value.contains('\0') {
        return Err(format!("{} '{}' must not contain NUL bytes", label, value));
    }
    Ok(())
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_last_segment() {
        let path = NormalizedPath::new("rules/python.style.md");
        assert_eq!(path.file_name(), Some("python.style.md"));
        assert_eq!(path.extension(), Some("md"));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let path = NormalizedPath::new("rules/.hidden");
        assert_eq!(path.extension(), None);
        assert_eq!(path.file_name(), Some(".hidden"));
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_path_identifier("cursor-basics", "Tool key").is_ok());
        assert!(validate_path_identifier("", "Tool key").is_err());
        assert!(validate_path_identifier("..", "Tool key").is_err());
        assert!(validate_path_identifier("a/b", "Tool key").is_err());
        assert!(validate_path_identifier("a\\b", "Tool key").is_err());
    }
}
