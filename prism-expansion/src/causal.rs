//! Causal expansion in two phases.
//!
//! 1. Resolve the causal nodes that affect each seed entity (one batch).
//! 2. Traverse upstream and downstream from those nodes, turning every
//!    cause and effect token into a node scored by link confidence.
//!
//! A token reached through several links keeps its highest confidence. The
//! view is returned sorted by score, best-first.

use std::collections::{HashMap, HashSet};

use prism_core::models::{
    ExpansionOutcome, GraphView, NodeData, ScoredNode, TraversalDirection, ViewSource,
};
use prism_core::traits::ICausalStore;
use tracing::{debug, warn};

use crate::expander::{dedup_ids, IGraphExpander};

/// Expands seeds through the causal store.
pub struct CausalExpander<S> {
    store: S,
}

impl<S: ICausalStore> CausalExpander<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ICausalStore> IGraphExpander for CausalExpander<S> {
    fn source(&self) -> ViewSource {
        ViewSource::Causal
    }

    async fn expand(&self, entity_ids: &[String], depth: usize) -> ExpansionOutcome {
        let ids = dedup_ids(entity_ids);
        if ids.is_empty() || depth == 0 {
            return ExpansionOutcome::ok(GraphView::empty(ViewSource::Causal));
        }

        // Phase 1: seeds → causal node ids.
        let by_entity = match self.store.get_nodes_for_entities(&ids).await {
            Ok(map) => map,
            Err(e) => {
                warn!(entities = ids.len(), error = %e, "causal node lookup failed");
                return ExpansionOutcome::degraded(
                    GraphView::empty(ViewSource::Causal),
                    e.to_string(),
                );
            }
        };

        let mut seen = HashSet::new();
        let node_ids: Vec<String> = ids
            .iter()
            .flat_map(|id| by_entity.get(id).into_iter().flatten())
            .filter(|node| seen.insert(node.id.clone()))
            .map(|node| node.id.clone())
            .collect();

        if node_ids.is_empty() {
            debug!(entities = ids.len(), "no causal nodes linked to seeds");
            return ExpansionOutcome::ok(GraphView::empty(ViewSource::Causal));
        }

        // Phase 2: walk both directions.
        let links = match self
            .store
            .traverse_from_node_ids(&node_ids, TraversalDirection::Both, depth)
            .await
        {
            Ok(links) => links,
            Err(e) => {
                warn!(start_nodes = node_ids.len(), error = %e, "causal traversal failed");
                return ExpansionOutcome::degraded(
                    GraphView::empty(ViewSource::Causal),
                    e.to_string(),
                );
            }
        };

        let mut nodes: Vec<ScoredNode> = Vec::new();
        let mut position: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;
        let mut clamped = 0usize;
        for link in &links {
            if !link.confidence.is_finite() {
                skipped += 1;
                continue;
            }
            let confidence = link.confidence.clamp(0.0, 1.0);
            if confidence != link.confidence {
                clamped += 1;
                debug!(
                    cause = %link.cause.id,
                    effect = %link.effect.id,
                    confidence = link.confidence,
                    "clamped out-of-range causal confidence"
                );
            }
            for token in [&link.cause, &link.effect] {
                match position.get(&token.id) {
                    Some(&i) => {
                        if nodes[i].effective_score() < confidence {
                            nodes[i].score = Some(confidence);
                        }
                    }
                    None => {
                        position.insert(token.id.clone(), nodes.len());
                        nodes.push(ScoredNode::new(
                            token.id.clone(),
                            NodeData::CausalToken(token.clone()),
                            confidence,
                        ));
                    }
                }
            }
        }
        if clamped > 0 {
            debug!(clamped, "causal links with confidence outside [0, 1]");
        }
        if skipped > 0 {
            warn!(skipped, "dropped causal links with non-finite confidence");
        }

        // Stable: equal confidences keep traversal order.
        nodes.sort_by(|a, b| b.effective_score().total_cmp(&a.effective_score()));

        debug!(
            start_nodes = node_ids.len(),
            links = links.len(),
            tokens = nodes.len(),
            "causal traversal complete"
        );
        ExpansionOutcome::ok(GraphView::new(ViewSource::Causal, nodes))
    }
}
