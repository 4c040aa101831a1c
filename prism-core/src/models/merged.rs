use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::view::{NodeData, ViewSource};

/// Per-source count of distinct node uuids that survived per-view truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ViewContributions {
    pub semantic: usize,
    pub entity: usize,
    pub temporal: usize,
    pub causal: usize,
}

impl ViewContributions {
    pub fn get(&self, source: ViewSource) -> usize {
        match source {
            ViewSource::Semantic => self.semantic,
            ViewSource::Entity => self.entity,
            ViewSource::Temporal => self.temporal,
            ViewSource::Causal => self.causal,
        }
    }

    pub fn add(&mut self, source: ViewSource, n: usize) {
        let slot = match source {
            ViewSource::Semantic => &mut self.semantic,
            ViewSource::Entity => &mut self.entity,
            ViewSource::Temporal => &mut self.temporal,
            ViewSource::Causal => &mut self.causal,
        };
        *slot += n;
    }

    pub fn total(&self) -> usize {
        self.semantic + self.entity + self.temporal + self.causal
    }
}

/// A node after cross-view fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MergedNode {
    pub uuid: String,
    /// Payload from the node's first occurrence.
    pub data: NodeData,
    pub final_score: f64,
    /// Number of input views that contained this node.
    pub view_count: usize,
    /// Contributing sources in merge-input order.
    pub views: Vec<ViewSource>,
}

impl MergedNode {
    pub fn seen_in(&self, source: ViewSource) -> bool {
        self.views.contains(&source)
    }
}

/// The ranked, fused result of one retrieval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MergedSubgraph {
    /// Sorted by `final_score` descending.
    pub nodes: Vec<MergedNode>,
    pub view_contributions: ViewContributions,
}

impl MergedSubgraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, uuid: &str) -> Option<&MergedNode> {
        self.nodes.iter().find(|n| n.uuid == uuid)
    }
}
