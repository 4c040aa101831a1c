//! Entity-relationship expansion: ring-by-ring BFS with one batched
//! relationship lookup per ring.
//!
//! Nodes found at ring `d` (0-based) score `1 / (d + 1)`, so the view comes
//! out best-first without sorting.

use std::collections::HashSet;

use prism_core::models::{ExpansionOutcome, GraphView, NodeData, ScoredNode, ViewSource};
use prism_core::traits::IEntityStore;
use tracing::{debug, warn};

use crate::expander::{dedup_ids, IGraphExpander};

/// Bounded breadth-first expansion over the entity store.
pub struct EntityExpander<S> {
    store: S,
}

impl<S: IEntityStore> EntityExpander<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: IEntityStore> IGraphExpander for EntityExpander<S> {
    fn source(&self) -> ViewSource {
        ViewSource::Entity
    }

    async fn expand(&self, entity_ids: &[String], depth: usize) -> ExpansionOutcome {
        let mut nodes: Vec<ScoredNode> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        // Ids already sent to the store; never re-queried on a later ring.
        let mut expanded: HashSet<String> = HashSet::new();
        let mut frontier = dedup_ids(entity_ids);

        for ring in 0..depth {
            frontier.retain(|id| expanded.insert(id.clone()));
            if frontier.is_empty() {
                debug!(ring, "entity frontier exhausted");
                break;
            }

            let batch = match self.store.get_relationships_batch(&frontier).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(
                        ring,
                        frontier = frontier.len(),
                        nodes_kept = nodes.len(),
                        error = %e,
                        "entity relationship batch failed, stopping expansion"
                    );
                    return ExpansionOutcome::degraded(
                        GraphView::new(ViewSource::Entity, nodes),
                        e.to_string(),
                    );
                }
            };

            let score = 1.0 / (ring as f64 + 1.0);
            let mut next = Vec::new();
            for id in &frontier {
                let Some(relationships) = batch.get(id) else {
                    continue;
                };
                for rel in relationships {
                    for endpoint in [&rel.source, &rel.target] {
                        if seen.insert(endpoint.id.clone()) {
                            nodes.push(ScoredNode::new(
                                endpoint.id.clone(),
                                NodeData::Entity(endpoint.clone()),
                                score,
                            ));
                            next.push(endpoint.id.clone());
                        }
                    }
                }
            }

            debug!(
                ring,
                queried = frontier.len(),
                discovered = next.len(),
                "entity ring expanded"
            );
            frontier = next;
        }

        ExpansionOutcome::ok(GraphView::new(ViewSource::Entity, nodes))
    }
}
