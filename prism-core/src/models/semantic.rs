use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ValidationError;

/// A concept in the semantic graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConceptRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A vector-similarity hit on a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SemanticMatch {
    pub concept: ConceptRecord,
    /// Similarity in [0, 1].
    pub score: f64,
}

/// A semantic match carrying the entities its concept is linked to.
///
/// `linked_entity_names[i]` names `linked_entity_ids[i]` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnrichedSemanticMatch {
    pub concept: ConceptRecord,
    pub score: f64,
    #[serde(default)]
    pub linked_entity_ids: Vec<String>,
    #[serde(default)]
    pub linked_entity_names: Vec<String>,
}

impl EnrichedSemanticMatch {
    pub fn has_links(&self) -> bool {
        !self.linked_entity_ids.is_empty()
    }

    /// Check shape: non-empty concept id, score in [0, 1], non-blank entity ids.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        validate_concept_score(&self.concept, self.score, index)?;
        if self.linked_entity_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ValidationError::MalformedMatch {
                index,
                reason: "linked entity id is blank".to_string(),
            });
        }
        Ok(())
    }
}

impl SemanticMatch {
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        validate_concept_score(&self.concept, self.score, index)
    }
}

fn validate_concept_score(
    concept: &ConceptRecord,
    score: f64,
    index: usize,
) -> Result<(), ValidationError> {
    if concept.id.trim().is_empty() {
        return Err(ValidationError::MalformedMatch {
            index,
            reason: "concept id is empty".to_string(),
        });
    }
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(ValidationError::MalformedMatch {
            index,
            reason: format!("score {score} is outside [0, 1]"),
        });
    }
    Ok(())
}
