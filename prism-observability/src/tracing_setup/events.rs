//! Structured log events with stable `event` field values.

use prism_core::models::{PhaseTiming, ViewSource};

/// An expansion branch fell back to an empty or partial view.
pub fn branch_degraded(source: ViewSource, reason: &str, nodes_kept: usize) {
    tracing::warn!(
        event = "branch_degraded",
        source = %source,
        reason,
        nodes_kept,
        "expansion branch degraded"
    );
}

/// An expansion branch exceeded its budget.
pub fn branch_timed_out(source: ViewSource, timeout_ms: u64) {
    tracing::warn!(
        event = "branch_timed_out",
        source = %source,
        timeout_ms,
        "expansion branch timed out"
    );
}

/// A degradation was recorded by the tracker.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component,
        failure,
        fallback,
        "component degraded"
    );
}

/// A retrieval finished.
pub fn retrieval_completed(node_count: usize, seed_count: usize, timing: &PhaseTiming) {
    tracing::info!(
        event = "retrieval_completed",
        node_count,
        seed_count,
        semantic_ms = timing.semantic_ms,
        seed_extraction_ms = timing.seed_extraction_ms,
        expansion_ms = timing.expansion_ms,
        merge_ms = timing.merge_ms,
        total_ms = timing.total_ms,
        "retrieval complete"
    );
}
