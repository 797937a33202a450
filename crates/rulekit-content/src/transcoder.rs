//! The transcoder seam and its MDC implementation

use async_trait::async_trait;

use crate::frontmatter::{RuleFrontMatter, split_front_matter};
use crate::metadata::RunMetadata;
use crate::template;
use crate::Result;
use rulekit_fs::{NormalizedPath, io};
use rulekit_meta::{TemplatesConfig, TranscodeConfig};

/// Converts one source document into one destination document.
///
/// Implementations read `source`, write `dest`, and create no directories.
/// A failed call must not leave a partially written file at `dest`.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(
        &self,
        source: &NormalizedPath,
        dest: &NormalizedPath,
        metadata: &RunMetadata,
        config: &TemplatesConfig,
    ) -> Result<()>;
}

/// Rewrites markdown rule templates into MDC rule documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct MdcTranscoder;

impl MdcTranscoder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transcoder for MdcTranscoder {
    async fn transcode(
        &self,
        source: &NormalizedPath,
        dest: &NormalizedPath,
        metadata: &RunMetadata,
        config: &TemplatesConfig,
    ) -> Result<()> {
        let native = source.to_native();
        let text = tokio::fs::read_to_string(&native)
            .await
            .map_err(|e| rulekit_fs::Error::io(&native, e))?;

        let output = render_document(&text, metadata, &config.transcode)?;

        let target = dest.clone();
        tokio::task::spawn_blocking(move || io::write_text(&target, &output)).await??;

        tracing::debug!("Transcoded {} -> {}", source, dest);
        Ok(())
    }
}

/// Produce the MDC text for one source document.
pub fn render_document(text: &str, metadata: &RunMetadata, config: &TranscodeConfig) -> Result<String> {
    let (source_fm, body) = split_front_matter(text)?;
    let body = body.trim_start_matches(['\r', '\n']);
    let front_matter = RuleFrontMatter::resolve(source_fm.as_ref(), body, config)?;

    let mut out = front_matter.render();
    if let Some(header) = &config.header {
        out.push_str(&template::render(header, metadata));
        out.push_str("\n\n");
    }
    out.push_str(&template::render(body, metadata));
    Ok(out)
}
