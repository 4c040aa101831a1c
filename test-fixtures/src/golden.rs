//! Typed golden retrieval scenarios under `test-fixtures/golden/retrieval/`.
//!
//! Event dates are stored relative to "now" so scenarios stay inside the
//! temporal lookup window regardless of when tests run.

use prism_core::models::{EnrichedSemanticMatch, ViewContributions};
use prism_core::Intent;
use serde::Deserialize;

use crate::builders;
use crate::stores::{
    InMemoryCausalStore, InMemoryEntityStore, InMemorySemanticSearch, InMemoryTemporalStore,
};

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRelationship {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenEvent {
    pub id: String,
    pub entity_id: String,
    pub days_from_now: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCausalEdge {
    pub cause: String,
    pub effect: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenAffects {
    pub node: String,
    pub entity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub seed_ids: Vec<String>,
    /// Leading uuids of the merged output, in order.
    pub top_uuids: Vec<String>,
    pub view_contributions: ViewContributions,
    /// Uuids expected to be confirmed by more than one view.
    #[serde(default)]
    pub multi_view_uuids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub query: String,
    pub intent: Intent,
    pub matches: Vec<EnrichedSemanticMatch>,
    #[serde(default)]
    pub relationships: Vec<GoldenRelationship>,
    #[serde(default)]
    pub events: Vec<GoldenEvent>,
    #[serde(default)]
    pub causal_edges: Vec<GoldenCausalEdge>,
    #[serde(default)]
    pub causal_affects: Vec<GoldenAffects>,
    pub expected: GoldenExpectation,
}

impl GoldenScenario {
    /// Load `golden/retrieval/<name>.json`.
    pub fn load(name: &str) -> Self {
        crate::load_fixture(&format!("golden/retrieval/{name}.json"))
    }

    pub fn semantic_store(&self) -> InMemorySemanticSearch {
        InMemorySemanticSearch::new(self.matches.clone())
    }

    pub fn entity_store(&self) -> InMemoryEntityStore {
        InMemoryEntityStore::new(
            self.relationships
                .iter()
                .map(|r| builders::relationship(&r.source, &r.target))
                .collect(),
        )
    }

    pub fn temporal_store(&self) -> InMemoryTemporalStore {
        InMemoryTemporalStore::new(
            self.events
                .iter()
                .map(|e| builders::event(&e.id, &e.entity_id, e.days_from_now))
                .collect(),
        )
    }

    pub fn causal_store(&self) -> InMemoryCausalStore {
        let mut store = InMemoryCausalStore::new();
        for edge in &self.causal_edges {
            store = store.edge(&edge.cause, &edge.effect, edge.confidence);
        }
        for a in &self.causal_affects {
            store = store.affects(&a.node, &a.entity);
        }
        store
    }
}
