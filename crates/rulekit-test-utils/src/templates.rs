//! [`TestTemplates`] builder for materialization test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace with a templates root and a destination root.
///
/// Tools are declared with [`TestTemplates::tool`]; the configuration file
/// is only written by [`TestTemplates::write_config`], so tests control
/// exactly when the registry changes.
///
/// # Example
///
/// ```rust,no_run
/// use rulekit_test_utils::TestTemplates;
///
/// let mut t = TestTemplates::new();
/// t.tool("python", "Python", "Python rules");
/// t.document("python", "style.md", "# Style\n");
/// t.write_config();
/// ```
pub struct TestTemplates {
    temp_dir: TempDir,
    tools: Vec<(String, String, String)>,
    extra_config: String,
}

impl Default for TestTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTemplates {
    /// Create empty `templates/` and `dest/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("templates")).unwrap();
        fs::create_dir_all(temp_dir.path().join("dest")).unwrap();
        Self {
            temp_dir,
            tools: Vec::new(),
            extra_config: String::new(),
        }
    }

    pub fn templates_root(&self) -> PathBuf {
        self.temp_dir.path().join("templates")
    }

    pub fn dest_root(&self) -> PathBuf {
        self.temp_dir.path().join("dest")
    }

    /// Path of the bundle directory for `key` (default `rules/` layout).
    pub fn bundle_dir(&self, key: &str) -> PathBuf {
        self.templates_root().join("rules").join(key)
    }

    /// Declare a tool in the registry.
    pub fn tool(&mut self, key: &str, name: &str, description: &str) -> &mut Self {
        self.tools
            .push((key.to_string(), name.to_string(), description.to_string()));
        self
    }

    /// Append raw TOML (e.g. `[layout]` or `[transcode]` tables) to the
    /// generated configuration.
    pub fn extra_config(&mut self, toml: &str) -> &mut Self {
        self.extra_config.push_str(toml);
        self.extra_config.push('\n');
        self
    }

    /// Create an empty bundle directory for `key`.
    pub fn empty_bundle(&mut self, key: &str) -> &mut Self {
        fs::create_dir_all(self.bundle_dir(key)).unwrap();
        self
    }

    /// Write one source document into the bundle for `key`.
    pub fn document(&mut self, key: &str, file_name: &str, content: &str) -> &mut Self {
        let dir = self.bundle_dir(key);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), content).unwrap();
        self
    }

    /// Write `count` numbered documents (`doc-00.md`, `doc-01.md`, ...).
    pub fn documents(&mut self, key: &str, count: usize) -> &mut Self {
        for i in 0..count {
            let name = format!("doc-{:02}.md", i);
            let body = format!("# Document {}\n\nBody {}.\n", i, i);
            self.document(key, &name, &body);
        }
        self
    }

    /// Write `rulekit.toml` from the declared tools and extra config.
    pub fn write_config(&mut self) -> &mut Self {
        let mut config = String::new();
        for (key, name, description) in &self.tools {
            config.push_str(&format!(
                "[tools.\"{}\"]\nname = \"{}\"\ndescription = \"{}\"\n\n",
                key, name, description
            ));
        }
        config.push_str(&self.extra_config);
        self.write_raw_config("rulekit.toml", &config);
        self
    }

    /// Write a configuration file verbatim.
    pub fn write_raw_config(&self, file_name: &str, content: &str) {
        fs::write(self.templates_root().join(file_name), content).unwrap();
    }

    /// Sorted file names directly inside `rel` under the destination root.
    pub fn dest_entries(&self, rel: &str) -> Vec<String> {
        let dir = self.dest_root().join(rel);
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Read a destination file relative to the destination root.
    pub fn read_dest(&self, rel: &str) -> String {
        let path = self.dest_root().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `rel` (relative to the destination root) exists.
    pub fn assert_dest_exists(&self, rel: &str) {
        assert_exists(&self.dest_root().join(rel), true);
    }

    /// Assert that `rel` (relative to the destination root) does not exist.
    pub fn assert_dest_not_exists(&self, rel: &str) {
        assert_exists(&self.dest_root().join(rel), false);
    }
}

fn assert_exists(path: &Path, expected: bool) {
    assert_eq!(
        path.exists(),
        expected,
        "Expected {} to {}exist",
        path.display(),
        if expected { "" } else { "NOT " }
    );
}
