//! MaterializationEngine implementation
//!
//! The engine turns a selection of tool keys into written rule documents.
//! Tools are processed one after another in selection order. Within a tool,
//! documents are transcoded in fixed-size batches: every document of a
//! batch runs concurrently, and the next batch only starts once the whole
//! batch has settled.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::report::{CopyPlan, MaterializeReport, PlannedTool, SkipReason, SkippedTool, ToolOutcome};
use crate::{Error, Result};
use rulekit_content::{MdcTranscoder, RunMetadata, Transcoder};
use rulekit_fs::{NormalizedPath, ensure_dir, exists, list_documents, validate_path_identifier};
use rulekit_meta::{ConfigLoader, TemplatesConfig};

/// Maximum number of documents transcoded concurrently.
pub const BATCH_SIZE: usize = 10;

/// Destination file name for a source document: the source extension is
/// replaced by `target_extension`, everything else is kept verbatim.
pub fn destination_name(file_name: &str, source_extension: &str, target_extension: &str) -> String {
    let stem = file_name
        .strip_suffix(source_extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(file_name);
    format!("{}.{}", stem, target_extension)
}

enum Bundle {
    Present(NormalizedPath),
    Skipped(SkipReason),
}

/// Materializes tool bundles from a templates root into destination trees.
pub struct MaterializationEngine {
    loader: ConfigLoader,
    transcoder: Arc<dyn Transcoder>,
}

impl MaterializationEngine {
    pub fn new(templates_root: impl Into<NormalizedPath>, transcoder: Arc<dyn Transcoder>) -> Self {
        Self {
            loader: ConfigLoader::new(templates_root),
            transcoder,
        }
    }

    /// Engine using the [`MdcTranscoder`].
    pub fn mdc(templates_root: impl Into<NormalizedPath>) -> Self {
        Self::new(templates_root, Arc::new(MdcTranscoder::new()))
    }

    pub fn templates_root(&self) -> &NormalizedPath {
        self.loader.root()
    }

    /// Read the templates configuration from disk.
    pub fn load_config(&self) -> Result<TemplatesConfig> {
        Ok(self.loader.load()?)
    }

    /// Source bundle directory for `key`.
    pub fn bundle_path(&self, key: &str, config: &TemplatesConfig) -> NormalizedPath {
        self.loader
            .root()
            .join(&config.layout.bundles_dir)
            .join(key)
    }

    /// Materialize `selection` under `destination_root` and return the
    /// number of documents written.
    ///
    /// See [`MaterializationEngine::materialize_with_report`].
    pub async fn materialize<S: AsRef<str>>(
        &self,
        destination_root: &NormalizedPath,
        selection: &[S],
        metadata: &RunMetadata,
        config: &TemplatesConfig,
    ) -> Result<usize> {
        let report = self
            .materialize_with_report(destination_root, selection, metadata, config)
            .await?;
        Ok(report.count)
    }

    /// Materialize `selection` under `destination_root`.
    ///
    /// The shared output directory is created first, even for an empty
    /// selection. Unknown keys and missing bundles are recorded as skips.
    /// Duplicated keys are processed once per occurrence.
    ///
    /// # Errors
    ///
    /// The first failure stops the run once the batch it occurred in has
    /// settled. Documents and directories written before that point are
    /// left in place.
    pub async fn materialize_with_report<S: AsRef<str>>(
        &self,
        destination_root: &NormalizedPath,
        selection: &[S],
        metadata: &RunMetadata,
        config: &TemplatesConfig,
    ) -> Result<MaterializeReport> {
        let layout = &config.layout;
        let output_root = destination_root.join(&layout.output_dir);
        ensure_dir(&output_root).await?;

        let mut report = MaterializeReport::default();
        for key in selection {
            let key = key.as_ref();

            let bundle = match self.locate_bundle(key, config).await? {
                Bundle::Present(path) => path,
                Bundle::Skipped(reason) => {
                    tracing::warn!("Skipping tool '{}': {}", key, reason);
                    report.outcomes.push(ToolOutcome::Skipped(SkippedTool {
                        key: key.to_string(),
                        reason,
                    }));
                    continue;
                }
            };

            let tool_dir = output_root.join(key);
            ensure_dir(&tool_dir).await.map_err(|source| Error::Directory {
                tool: key.to_string(),
                source,
            })?;

            let documents = list_documents(&bundle, &layout.source_extension)
                .await
                .map_err(|source| Error::Bundle {
                    tool: key.to_string(),
                    source,
                })?;

            let mut written = 0;
            for batch in documents.chunks(BATCH_SIZE) {
                written += self
                    .transcode_batch(key, batch, &tool_dir, metadata, config)
                    .await?;
            }

            tracing::info!("Wrote {} document(s) for tool '{}'", written, key);
            report.count += written;
            report.outcomes.push(ToolOutcome::Written {
                key: key.to_string(),
                documents: written,
            });
        }

        Ok(report)
    }

    /// Number of documents [`MaterializationEngine::materialize`] would
    /// write for `selection`, without touching the destination.
    pub async fn count_planned<S: AsRef<str>>(&self, selection: &[S]) -> Result<usize> {
        Ok(self.plan(selection).await?.count())
    }

    /// Per-tool breakdown of what `selection` would produce.
    ///
    /// Reads the configuration afresh; performs no writes.
    pub async fn plan<S: AsRef<str>>(&self, selection: &[S]) -> Result<CopyPlan> {
        let loader = self.loader.clone();
        let config = tokio::task::spawn_blocking(move || loader.load()).await??;
        let layout = &config.layout;

        let mut plan = CopyPlan::default();
        for key in selection {
            let key = key.as_ref();
            match self.locate_bundle(key, &config).await? {
                Bundle::Skipped(reason) => {
                    tracing::debug!("Plan skips tool '{}': {}", key, reason);
                    plan.skipped.push(SkippedTool {
                        key: key.to_string(),
                        reason,
                    });
                }
                Bundle::Present(bundle) => {
                    let documents = list_documents(&bundle, &layout.source_extension)
                        .await
                        .map_err(|source| Error::Bundle {
                            tool: key.to_string(),
                            source,
                        })?;
                    plan.tools.push(PlannedTool {
                        key: key.to_string(),
                        documents: documents
                            .iter()
                            .filter_map(|doc| doc.file_name())
                            .map(|name| {
                                destination_name(
                                    name,
                                    &layout.source_extension,
                                    &layout.target_extension,
                                )
                            })
                            .collect(),
                    });
                }
            }
        }

        Ok(plan)
    }

    async fn locate_bundle(&self, key: &str, config: &TemplatesConfig) -> Result<Bundle> {
        // Keys that cannot name a single directory are never registered.
        if !config.tools.contains_key(key) || validate_path_identifier(key, "tool key").is_err() {
            return Ok(Bundle::Skipped(SkipReason::UnknownTool));
        }

        let bundle = self.bundle_path(key, config);
        let present = exists(&bundle).await.map_err(|source| Error::Bundle {
            tool: key.to_string(),
            source,
        })?;

        if present {
            Ok(Bundle::Present(bundle))
        } else {
            Ok(Bundle::Skipped(SkipReason::BundleMissing))
        }
    }

    /// Transcode one batch concurrently and wait for all of it to settle.
    ///
    /// Returns the number of documents written, or the first failure in
    /// completion order.
    async fn transcode_batch(
        &self,
        tool: &str,
        batch: &[NormalizedPath],
        tool_dir: &NormalizedPath,
        metadata: &RunMetadata,
        config: &TemplatesConfig,
    ) -> Result<usize> {
        let layout = &config.layout;
        let transcoder = self.transcoder.as_ref();

        let mut pending: FuturesUnordered<_> = batch
            .iter()
            .map(|source| {
                let document = source.file_name().unwrap_or_default().to_string();
                let dest = tool_dir.join(&destination_name(
                    &document,
                    &layout.source_extension,
                    &layout.target_extension,
                ));
                async move {
                    let result = transcoder.transcode(source, &dest, metadata, config).await;
                    (document, dest, result)
                }
            })
            .collect();

        let mut written = 0;
        let mut first_error = None;
        while let Some((document, dest, result)) = pending.next().await {
            match result {
                Ok(()) => {
                    tracing::debug!("Wrote {}", dest);
                    written += 1;
                }
                Err(source) => {
                    tracing::warn!("Transcode of '{}' for tool '{}' failed: {}", document, tool, source);
                    if first_error.is_none() {
                        first_error = Some(Error::Transcode {
                            tool: tool.to_string(),
                            document,
                            source,
                        });
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }
}
