use std::collections::HashSet;

use prism_core::models::{SeedEntity, SeedExtractionResult};

/// Accumulates seeds across qualifying concepts. Shared by both extractors
/// so ownership and dedup rules stay identical.
#[derive(Default)]
pub(crate) struct SeedBuilder {
    seen_entities: HashSet<String>,
    seen_concepts: HashSet<String>,
    result: SeedExtractionResult,
}

impl SeedBuilder {
    /// Register one qualifying concept and the entities it links to.
    pub(crate) fn add_concept<'a>(
        &mut self,
        concept_id: &str,
        score: f64,
        linked: impl IntoIterator<Item = &'a str>,
    ) {
        self.result.stats.concepts_searched += 1;
        if self.seen_concepts.insert(concept_id.to_string()) {
            self.result.concept_ids.push(concept_id.to_string());
        }

        let mut links = 0;
        for entity_id in linked {
            links += 1;
            if self.seen_entities.insert(entity_id.to_string()) {
                self.result.entity_seeds.push(SeedEntity {
                    entity_id: entity_id.to_string(),
                    source_concept_id: concept_id.to_string(),
                    semantic_score: score,
                });
            }
        }
        if links == 0 {
            self.result.stats.concepts_without_links += 1;
        }
    }

    pub(crate) fn finish(mut self) -> SeedExtractionResult {
        self.result.stats.entities_found = self.result.entity_seeds.len();
        self.result
    }
}

