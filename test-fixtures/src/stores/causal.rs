use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use prism_core::models::{CausalLink, CausalNode, CausalToken, TraversalDirection};
use prism_core::traits::ICausalStore;
use prism_core::StoreError;

use super::{Behavior, CallLog};

/// Causal DAG held in a petgraph `DiGraph`; edge weight is link confidence.
#[derive(Debug, Default)]
pub struct InMemoryCausalStore {
    graph: DiGraph<CausalToken, f64>,
    index: HashMap<String, NodeIndex>,
    /// entity id → causal node ids that affect it.
    affects: HashMap<String, Vec<String>>,
    node_behavior: Behavior,
    traverse_behavior: Behavior,
    node_calls: CallLog,
    traverse_calls: CallLog,
}

impl InMemoryCausalStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(id) {
            return *idx;
        }
        let idx = self.graph.add_node(CausalToken {
            id: id.to_string(),
            label: format!("Token {id}"),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Add a cause→effect edge.
    pub fn edge(mut self, cause: &str, effect: &str, confidence: f64) -> Self {
        let c = self.ensure_node(cause);
        let e = self.ensure_node(effect);
        self.graph.add_edge(c, e, confidence);
        self
    }

    /// Record that causal node `node_id` affects `entity_id`.
    pub fn affects(mut self, node_id: &str, entity_id: &str) -> Self {
        self.ensure_node(node_id);
        self.affects
            .entry(entity_id.to_string())
            .or_default()
            .push(node_id.to_string());
        self
    }

    /// Behavior of the node-resolution phase.
    pub fn with_node_behavior(mut self, behavior: Behavior) -> Self {
        self.node_behavior = behavior;
        self
    }

    /// Behavior of the traversal phase.
    pub fn with_traverse_behavior(mut self, behavior: Behavior) -> Self {
        self.traverse_behavior = behavior;
        self
    }

    pub fn node_call_count(&self) -> usize {
        self.node_calls.batches().len()
    }

    pub fn traverse_call_count(&self) -> usize {
        self.traverse_calls.batches().len()
    }

    fn link(&self, cause: NodeIndex, effect: NodeIndex, confidence: f64) -> CausalLink {
        CausalLink {
            cause: self.graph[cause].clone(),
            effect: self.graph[effect].clone(),
            confidence,
        }
    }
}

impl ICausalStore for InMemoryCausalStore {
    async fn get_nodes_for_entities(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<CausalNode>>, StoreError> {
        let call = self.node_calls.record(ids);
        self.node_behavior.apply("causal", call).await?;

        let mut out = HashMap::new();
        for id in ids {
            if let Some(node_ids) = self.affects.get(id) {
                let nodes: Vec<CausalNode> = node_ids
                    .iter()
                    .filter_map(|nid| self.index.get(nid))
                    .map(|idx| CausalNode {
                        id: self.graph[*idx].id.clone(),
                        label: self.graph[*idx].label.clone(),
                    })
                    .collect();
                out.insert(id.clone(), nodes);
            }
        }
        Ok(out)
    }

    async fn traverse_from_node_ids(
        &self,
        node_ids: &[String],
        direction: TraversalDirection,
        depth: usize,
    ) -> Result<Vec<CausalLink>, StoreError> {
        let call = self.traverse_calls.record(node_ids);
        self.traverse_behavior.apply("causal", call).await?;

        let follow_out = matches!(
            direction,
            TraversalDirection::Downstream | TraversalDirection::Both
        );
        let follow_in = matches!(
            direction,
            TraversalDirection::Upstream | TraversalDirection::Both
        );

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
        for id in node_ids {
            if let Some(idx) = self.index.get(id) {
                if visited.insert(*idx) {
                    queue.push_back((*idx, 0));
                }
            }
        }

        let mut seen_edges = HashSet::new();
        let mut links = Vec::new();
        while let Some((current, d)) = queue.pop_front() {
            if d >= depth {
                continue;
            }
            if follow_out {
                for edge in self.graph.edges_directed(current, Direction::Outgoing) {
                    if seen_edges.insert(edge.id()) {
                        links.push(self.link(current, edge.target(), *edge.weight()));
                    }
                    if visited.insert(edge.target()) {
                        queue.push_back((edge.target(), d + 1));
                    }
                }
            }
            if follow_in {
                for edge in self.graph.edges_directed(current, Direction::Incoming) {
                    if seen_edges.insert(edge.id()) {
                        links.push(self.link(edge.source(), current, *edge.weight()));
                    }
                    if visited.insert(edge.source()) {
                        queue.push_back((edge.source(), d + 1));
                    }
                }
            }
        }
        Ok(links)
    }
}
