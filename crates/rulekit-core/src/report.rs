//! Outcome and plan types produced by the engine

use serde::{Deserialize, Serialize};

/// Why a selected tool produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The key is not in the registry
    UnknownTool,
    /// The key is known but has no bundle directory
    BundleMissing,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnknownTool => write!(f, "unknown tool"),
            SkipReason::BundleMissing => write!(f, "bundle missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTool {
    pub key: String,
    pub reason: SkipReason,
}

/// What happened to one entry of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    Written { key: String, documents: usize },
    Skipped(SkippedTool),
}

/// Result of a successful materialization run.
///
/// Outcomes are in selection order; duplicated keys appear once per
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeReport {
    /// Documents written
    pub count: usize,
    pub outcomes: Vec<ToolOutcome>,
}

impl MaterializeReport {
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedTool> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ToolOutcome::Skipped(skipped) => Some(skipped),
            ToolOutcome::Written { .. } => None,
        })
    }
}

/// Destination documents one selected tool would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTool {
    pub key: String,
    /// Destination file names, in processing order
    pub documents: Vec<String>,
}

/// Dry-run view of a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPlan {
    pub tools: Vec<PlannedTool>,
    pub skipped: Vec<SkippedTool>,
}

impl CopyPlan {
    /// Number of documents the plan would write.
    pub fn count(&self) -> usize {
        self.tools.iter().map(|tool| tool.documents.len()).sum()
    }
}
