use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An entity surfaced from semantic search, used as an expansion start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeedEntity {
    pub entity_id: String,
    /// The first (highest-similarity) concept that linked to this entity.
    pub source_concept_id: String,
    pub semantic_score: f64,
}

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeedStats {
    /// Concepts at or above the score floor.
    pub concepts_searched: usize,
    /// Distinct entity seeds produced.
    pub entities_found: usize,
    /// Qualifying concepts with no linked entities.
    pub concepts_without_links: usize,
}

/// Output of seed extraction. Recomputed per query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeedExtractionResult {
    pub entity_seeds: Vec<SeedEntity>,
    pub concept_ids: Vec<String>,
    pub stats: SeedStats,
}

impl SeedExtractionResult {
    /// Seed entity ids in discovery order.
    pub fn entity_ids(&self) -> Vec<String> {
        self.entity_seeds
            .iter()
            .map(|s| s.entity_id.clone())
            .collect()
    }

    pub fn has_seeds(&self) -> bool {
        !self.entity_seeds.is_empty()
    }
}
