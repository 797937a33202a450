//! YAML front matter parsing and MDC front matter rendering

use serde_yaml::{Mapping, Value};

use crate::{Error, Result};
use rulekit_meta::TranscodeConfig;

const DELIMITER: &str = "---";

/// Split a document into its front matter mapping and body.
///
/// Documents without an opening `---` line have no front matter. An opening
/// line without a closing one, or front matter that is not a YAML mapping,
/// is an error.
pub fn split_front_matter(text: &str) -> Result<(Option<Mapping>, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(rest) = strip_delimiter_line(text) else {
        return Ok((None, text));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(parse_mapping(yaml)?), body));
        }
        offset += line.len();
    }

    Err(Error::parse("front matter", "missing closing `---` line"))
}

fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn parse_mapping(yaml: &str) -> Result<Mapping> {
    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| Error::parse("YAML", e.to_string()))?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::parse("YAML", "front matter must be a mapping")),
    }
}

/// The three keys an MDC rule document carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleFrontMatter {
    pub description: String,
    /// Comma-separated glob list
    pub globs: String,
    pub always_apply: bool,
}

impl RuleFrontMatter {
    /// Resolve the rule front matter for a document.
    ///
    /// Source keys win; otherwise the description falls back to the first
    /// `# ` heading of `body`, and globs / `alwaysApply` fall back to the
    /// configured defaults.
    pub fn resolve(source: Option<&Mapping>, body: &str, defaults: &TranscodeConfig) -> Result<Self> {
        let empty = Mapping::new();
        let source = source.unwrap_or(&empty);

        let description = match source.get("description") {
            Some(value) => scalar_string("description", value)?,
            None => first_heading(body).unwrap_or_default(),
        };

        let globs = match source.get("globs") {
            Some(value) => glob_list(value)?,
            None => defaults.default_globs.join(","),
        };

        let always_apply = match source
            .get("alwaysApply")
            .or_else(|| source.get("always_apply"))
        {
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(Error::field("alwaysApply", "expected true or false")),
            None => defaults.always_apply,
        };

        Ok(Self {
            description,
            globs,
            always_apply,
        })
    }

    /// Render as an MDC front matter block, including both delimiters and
    /// a trailing newline.
    ///
    /// Values are written unquoted, the way Cursor writes them, so a glob
    /// such as `**/*.py` or a description containing `: ` is emitted as is
    /// and the block is not guaranteed to be strict YAML. Every value is a
    /// single line.
    pub fn render(&self) -> String {
        format!(
            "{DELIMITER}\n{}\n{}\nalwaysApply: {}\n{DELIMITER}\n",
            key_line("description", &self.description),
            key_line("globs", &self.globs),
            self.always_apply
        )
    }
}

fn key_line(key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{}:", key)
    } else {
        format!("{}: {}", key, value)
    }
}

fn scalar_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(single_line(s)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::field(field, "expected a single value")),
    }
}

fn glob_list(value: &Value) -> Result<String> {
    match value {
        Value::Sequence(items) => {
            let globs = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(single_line(s)),
                    _ => Err(Error::field("globs", "list items must be strings")),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(globs.join(","))
        }
        other => scalar_string("globs", other),
    }
}

/// Collapse every run of whitespace, line breaks included, to one space.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
}
