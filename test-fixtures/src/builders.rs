//! Terse constructors for model values used across tests.

use chrono::{Duration, Utc};
use prism_core::models::*;

pub fn concept(id: &str) -> ConceptRecord {
    ConceptRecord {
        id: id.to_string(),
        name: format!("Concept {id}"),
        description: None,
    }
}

pub fn entity(id: &str) -> EntityRecord {
    EntityRecord {
        id: id.to_string(),
        name: format!("Entity {id}"),
        entity_type: None,
    }
}

/// A semantic match linked to `entity_ids`.
pub fn enriched(concept_id: &str, score: f64, entity_ids: &[&str]) -> EnrichedSemanticMatch {
    EnrichedSemanticMatch {
        concept: concept(concept_id),
        score,
        linked_entity_ids: entity_ids.iter().map(|s| s.to_string()).collect(),
        linked_entity_names: entity_ids.iter().map(|s| format!("Entity {s}")).collect(),
    }
}

pub fn semantic_match(concept_id: &str, score: f64) -> SemanticMatch {
    SemanticMatch {
        concept: concept(concept_id),
        score,
    }
}

pub fn relationship(source: &str, target: &str) -> Relationship {
    Relationship {
        id: format!("{source}->{target}"),
        relation_type: "related_to".to_string(),
        source: entity(source),
        target: entity(target),
    }
}

/// An event `days_from_now` days away (negative = past).
pub fn event(id: &str, entity_id: &str, days_from_now: i64) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        entity_id: entity_id.to_string(),
        description: format!("Event {id}"),
        occurred_at: Utc::now() + Duration::days(days_from_now),
        event_type: None,
    }
}

pub fn token(id: &str) -> CausalToken {
    CausalToken {
        id: id.to_string(),
        label: format!("Token {id}"),
    }
}

pub fn causal_node(id: &str) -> CausalNode {
    CausalNode {
        id: id.to_string(),
        label: format!("Token {id}"),
    }
}

pub fn causal_link(cause: &str, effect: &str, confidence: f64) -> CausalLink {
    CausalLink {
        cause: token(cause),
        effect: token(effect),
        confidence,
    }
}

pub fn view(source: ViewSource, scored: &[(&str, f64)]) -> GraphView {
    GraphView::new(
        source,
        scored
            .iter()
            .map(|(id, score)| ScoredNode::new(*id, NodeData::Entity(entity(id)), *score))
            .collect(),
    )
}
