use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::merged::MergedSubgraph;
use super::seeds::SeedExtractionResult;
use super::view::{GraphView, ViewSource};

/// What an expander hands back: its view plus, when the store misbehaved,
/// the reason the view is empty or partial.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionOutcome {
    pub view: GraphView,
    pub degradation: Option<String>,
}

impl ExpansionOutcome {
    pub fn ok(view: GraphView) -> Self {
        Self {
            view,
            degradation: None,
        }
    }

    /// A view built despite a store failure (possibly empty).
    pub fn degraded(view: GraphView, reason: impl Into<String>) -> Self {
        Self {
            view,
            degradation: Some(reason.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

/// Settled state of one expansion branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchStatus {
    /// Returned at least one node.
    Ok,
    /// Completed normally with nothing to report.
    Empty,
    /// The store failed; the view holds whatever was gathered first.
    Degraded { reason: String },
    /// Exceeded the per-branch budget.
    TimedOut { timeout_ms: u64 },
    /// Not run because no entity seeds were found.
    Skipped,
}

/// Per-branch diagnostics, reported alongside (not inside) the merged result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BranchReport {
    pub source: ViewSource,
    pub status: BranchStatus,
    pub node_count: usize,
    pub elapsed_ms: u64,
}

/// Wall-clock milliseconds per pipeline phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhaseTiming {
    pub semantic_ms: u64,
    pub seed_extraction_ms: u64,
    pub expansion_ms: u64,
    pub merge_ms: u64,
    pub total_ms: u64,
}

/// Everything one `execute` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecutionResult {
    pub merged: MergedSubgraph,
    pub seeds: SeedExtractionResult,
    pub timing: PhaseTiming,
    pub branches: Vec<BranchReport>,
}

impl ExecutionResult {
    /// Reports for branches that degraded or timed out.
    pub fn degraded_branches(&self) -> Vec<&BranchReport> {
        self.branches
            .iter()
            .filter(|b| {
                matches!(
                    b.status,
                    BranchStatus::Degraded { .. } | BranchStatus::TimedOut { .. }
                )
            })
            .collect()
    }
}
