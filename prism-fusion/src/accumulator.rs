//! Per-uuid accumulation across views.

use std::collections::HashMap;

use prism_core::models::{MergedNode, NodeData, ScoredNode, ViewSource};

struct Entry {
    data: NodeData,
    views: Vec<ViewSource>,
    raw_scores: Vec<f64>,
}

/// Collects node occurrences keyed by uuid, remembering first-seen order.
#[derive(Default)]
pub(crate) struct Accumulator {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl Accumulator {
    pub(crate) fn add(&mut self, source: ViewSource, node: &ScoredNode) {
        let score = node.effective_score();
        match self.entries.get_mut(&node.uuid) {
            Some(entry) => {
                entry.views.push(source);
                entry.raw_scores.push(score);
            }
            None => {
                self.order.push(node.uuid.clone());
                self.entries.insert(
                    node.uuid.clone(),
                    Entry {
                        data: node.data.clone(),
                        views: vec![source],
                        raw_scores: vec![score],
                    },
                );
            }
        }
    }

    /// Emit merged nodes in first-seen order with boosted scores.
    pub(crate) fn finish(mut self, boost: f64) -> Vec<MergedNode> {
        self.order
            .into_iter()
            .filter_map(|uuid| {
                let entry = self.entries.remove(&uuid)?;
                let view_count = entry.views.len();
                let avg = entry.raw_scores.iter().sum::<f64>() / view_count as f64;
                Some(MergedNode {
                    uuid,
                    data: entry.data,
                    final_score: boosted_score(avg, boost, view_count),
                    view_count,
                    views: entry.views,
                })
            })
            .collect()
    }
}

/// `avg * boost^(view_count - 1)`; a single-view node keeps its score.
pub(crate) fn boosted_score(avg: f64, boost: f64, view_count: usize) -> f64 {
    let exponent = view_count.saturating_sub(1).min(i32::MAX as usize) as i32;
    avg * boost.powi(exponent)
}
