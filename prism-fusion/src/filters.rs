//! Downstream filters over a merged subgraph.
//!
//! All filters preserve rank order and leave `view_contributions` untouched:
//! contributions describe the merge input, not the filtered output.

use prism_core::errors::ValidationError;
use prism_core::models::{MergedNode, MergedSubgraph, ViewSource};

fn keep(merged: &MergedSubgraph, pred: impl Fn(&MergedNode) -> bool) -> MergedSubgraph {
    MergedSubgraph {
        nodes: merged.nodes.iter().filter(|n| pred(n)).cloned().collect(),
        view_contributions: merged.view_contributions,
    }
}

pub fn top_n(merged: &MergedSubgraph, n: usize) -> MergedSubgraph {
    MergedSubgraph {
        nodes: merged.nodes.iter().take(n).cloned().collect(),
        view_contributions: merged.view_contributions,
    }
}

pub fn filter_by_view_count(
    merged: &MergedSubgraph,
    min_views: usize,
) -> Result<MergedSubgraph, ValidationError> {
    if min_views < 1 {
        return Err(ValidationError::OutOfRange {
            field: "min_views",
            value: min_views as f64,
            min: 1.0,
            max: f64::INFINITY,
        });
    }
    Ok(keep(merged, |n| n.view_count >= min_views))
}

pub fn filter_by_score(
    merged: &MergedSubgraph,
    min_score: f64,
) -> Result<MergedSubgraph, ValidationError> {
    ValidationError::check_range("min_score", min_score, 0.0, f64::INFINITY)?;
    Ok(keep(merged, |n| n.final_score >= min_score))
}

pub fn nodes_from_view(merged: &MergedSubgraph, source: ViewSource) -> MergedSubgraph {
    keep(merged, |n| n.seen_in(source))
}
