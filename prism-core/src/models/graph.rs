use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::view::EntityRecord;

/// An edge in the entity-relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Relationship {
    pub id: String,
    pub relation_type: String,
    pub source: EntityRecord,
    pub target: EntityRecord,
}

/// A node in the causal graph, linked to the entities it affects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CausalNode {
    pub id: String,
    pub label: String,
}

/// One endpoint of a cause→effect link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CausalToken {
    pub id: String,
    pub label: String,
}

/// A cause→effect link produced by causal traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CausalLink {
    pub cause: CausalToken,
    pub effect: CausalToken,
    /// Link confidence in [0, 1].
    pub confidence: f64,
}

/// Which edges a causal traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TraversalDirection {
    /// Towards causes.
    Upstream,
    /// Towards effects.
    Downstream,
    Both,
}

/// A concept→entity link held by the cross-link store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityLink {
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}
