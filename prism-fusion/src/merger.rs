//! The Merger: validate → cap each view → accumulate by uuid → boost → sort.
//!
//! `final_score = avg(raw scores) * multi_view_boost^(view_count - 1)`
//!
//! Each view is truncated to `max_nodes_per_view` before accumulation. The
//! cap limits how much any single view can contribute, not global rank. A
//! uuid repeated inside one view counts once for that view, both in its
//! `view_count` and in the view's contribution.

use std::collections::HashSet;

use prism_core::config::MergerConfig;
use prism_core::errors::ValidationError;
use prism_core::models::{GraphView, MergedSubgraph, ViewContributions, ViewSource};
use tracing::debug;

use crate::accumulator::Accumulator;
use crate::filters;

/// Fuses graph views into one ranked subgraph.
#[derive(Debug, Clone)]
pub struct Merger {
    config: MergerConfig,
}

impl Merger {
    /// Build a merger, rejecting out-of-range configuration.
    pub fn new(config: MergerConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MergerConfig {
        &self.config
    }

    /// Fuse `views` (in the caller's order) into a ranked subgraph.
    pub fn merge(&self, views: &[GraphView]) -> Result<MergedSubgraph, ValidationError> {
        for (index, view) in views.iter().enumerate() {
            view.validate(index)?;
        }

        let mut acc = Accumulator::default();
        let mut contributions = ViewContributions::default();

        for view in views {
            let kept = &view.nodes[..view.nodes.len().min(self.config.max_nodes_per_view)];
            if kept.len() < view.nodes.len() {
                debug!(
                    source = %view.source,
                    total = view.nodes.len(),
                    kept = kept.len(),
                    "view truncated"
                );
            }
            if kept.len() < self.config.min_nodes_per_view {
                debug!(
                    source = %view.source,
                    nodes = kept.len(),
                    min = self.config.min_nodes_per_view,
                    "sparse view"
                );
            }

            let mut in_view = HashSet::new();
            for node in kept {
                if in_view.insert(node.uuid.as_str()) {
                    acc.add(view.source, node);
                }
            }
            contributions.add(view.source, in_view.len());
        }

        let mut nodes = acc.finish(self.config.multi_view_boost);
        // sort_by is stable: ties keep first-occurrence order.
        nodes.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        debug!(
            views = views.len(),
            nodes = nodes.len(),
            multi_view = nodes.iter().filter(|n| n.view_count > 1).count(),
            "merge complete"
        );

        Ok(MergedSubgraph {
            nodes,
            view_contributions: contributions,
        })
    }

    /// The first `n` nodes.
    pub fn top_n(&self, merged: &MergedSubgraph, n: usize) -> MergedSubgraph {
        filters::top_n(merged, n)
    }

    /// Nodes confirmed by at least `min_views` views (`min_views >= 1`).
    pub fn filter_by_view_count(
        &self,
        merged: &MergedSubgraph,
        min_views: usize,
    ) -> Result<MergedSubgraph, ValidationError> {
        filters::filter_by_view_count(merged, min_views)
    }

    /// Nodes with `final_score >= min_score` (`min_score >= 0`).
    pub fn filter_by_score(
        &self,
        merged: &MergedSubgraph,
        min_score: f64,
    ) -> Result<MergedSubgraph, ValidationError> {
        filters::filter_by_score(merged, min_score)
    }

    /// Nodes that `source` contributed to.
    pub fn get_nodes_from_view(
        &self,
        merged: &MergedSubgraph,
        source: ViewSource,
    ) -> MergedSubgraph {
        filters::nodes_from_view(merged, source)
    }

    /// Whether `view` is well formed and holds at least `min_nodes_per_view`
    /// nodes. Malformed views yield `false`, not an error.
    pub fn has_minimum_nodes(&self, view: &GraphView) -> bool {
        view.validate(0).is_ok() && view.nodes.len() >= self.config.min_nodes_per_view
    }
}
