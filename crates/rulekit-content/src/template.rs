//! `{{ placeholder }}` substitution

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::metadata::RunMetadata;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_.-]*)\s*\}\}").unwrap());

/// Replace known placeholders with values from `metadata`.
///
/// Unknown placeholders are left exactly as written.
pub fn render(text: &str, metadata: &RunMetadata) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match metadata.lookup(&caps[1]) {
            Some(value) => value,
            None => caps[0].to_string(),
        })
        .into_owned()
}
