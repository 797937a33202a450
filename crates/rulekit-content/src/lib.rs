//! Document transcoding for rulekit
//!
//! Turns one markdown rule template into one MDC rule document:
//! the YAML front matter is normalized to the `description` / `globs` /
//! `alwaysApply` keys and `{{ placeholders }}` in the body are filled from
//! the run metadata.
//!
//! The [`Transcoder`] trait is the seam the materialization engine drives;
//! [`MdcTranscoder`] is the shipped implementation.

pub mod error;
pub mod frontmatter;
pub mod metadata;
pub mod template;
pub mod transcoder;

pub use error::{Error, Result};
pub use frontmatter::{RuleFrontMatter, split_front_matter};
pub use metadata::RunMetadata;
pub use transcoder::{MdcTranscoder, Transcoder, render_document};
