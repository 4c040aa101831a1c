use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::graph::CausalToken;
use super::semantic::ConceptRecord;
use crate::constants::DEFAULT_NODE_SCORE;
use crate::errors::ValidationError;

/// The retrieval strategy that produced a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ViewSource {
    Semantic,
    Entity,
    Temporal,
    Causal,
}

impl ViewSource {
    /// All sources in merge-input order.
    pub const ALL: [ViewSource; 4] = [Self::Semantic, Self::Entity, Self::Temporal, Self::Causal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Entity => "entity",
            Self::Temporal => "temporal",
            Self::Causal => "causal",
        }
    }

    /// Parse a source tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

impl fmt::Display for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity snapshot as returned by the entity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// A timeline event attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EventRecord {
    pub id: String,
    pub entity_id: String,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// Payload of a scored node, one variant per kind of node the views produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum NodeData {
    Concept(ConceptRecord),
    Entity(EntityRecord),
    Event(EventRecord),
    CausalToken(CausalToken),
}

impl NodeData {
    /// Human-readable label for logs and linearization.
    pub fn label(&self) -> &str {
        match self {
            Self::Concept(c) => &c.name,
            Self::Entity(e) => &e.name,
            Self::Event(e) => &e.description,
            Self::CausalToken(t) => &t.label,
        }
    }
}

/// One node within a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredNode {
    pub uuid: String,
    pub data: NodeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ScoredNode {
    pub fn new(uuid: impl Into<String>, data: NodeData, score: f64) -> Self {
        Self {
            uuid: uuid.into(),
            data,
            score: Some(score),
        }
    }

    /// Node without an explicit score.
    pub fn unscored(uuid: impl Into<String>, data: NodeData) -> Self {
        Self {
            uuid: uuid.into(),
            data,
            score: None,
        }
    }

    /// The score, defaulting to 1.0 when the producer left it unset.
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(DEFAULT_NODE_SCORE)
    }
}

/// The scored node list produced by one retrieval strategy.
///
/// Producers emit nodes best-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphView {
    pub source: ViewSource,
    pub nodes: Vec<ScoredNode>,
}

impl GraphView {
    pub fn new(source: ViewSource, nodes: Vec<ScoredNode>) -> Self {
        Self { source, nodes }
    }

    pub fn empty(source: ViewSource) -> Self {
        Self {
            source,
            nodes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check every node has an id and a usable score.
    ///
    /// `index` is the view's position in the caller's input, echoed in errors.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        for (pos, node) in self.nodes.iter().enumerate() {
            if node.uuid.trim().is_empty() {
                return Err(ValidationError::MalformedView {
                    index,
                    reason: format!("{} node {pos} has an empty uuid", self.source),
                });
            }
            if let Some(score) = node.score {
                if !score.is_finite() || score < 0.0 {
                    return Err(ValidationError::MalformedView {
                        index,
                        reason: format!(
                            "{} node {} has invalid score {score}",
                            self.source, node.uuid
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
