use std::collections::HashMap;

use prism_core::config::PrismConfig;
use prism_core::errors::{PrismResult, Stage, ValidationError};
use prism_core::models::{EntityLink, SeedExtractionResult, SemanticMatch};
use prism_core::traits::ICrossLinkStore;
use tracing::debug;

use super::builder::SeedBuilder;

/// Extract entity seeds from plain matches, resolving concept→entity links
/// through a cross-link store in chunks of `batch_size` concepts.
///
/// Links are gathered for every chunk first and then applied in match
/// order, so dedup and ownership are the same as [`super::extract_seeds`]
/// no matter where chunk boundaries fall. A store failure aborts the
/// extraction.
pub async fn extract_seeds_batched<S: ICrossLinkStore>(
    store: &S,
    matches: &[SemanticMatch],
    min_score: f64,
    batch_size: usize,
) -> PrismResult<SeedExtractionResult> {
    validate(matches, min_score, batch_size).map_err(|e| e.at(Stage::SeedExtraction))?;

    let qualifying: Vec<&SemanticMatch> =
        matches.iter().filter(|m| m.score >= min_score).collect();

    let mut concept_ids: Vec<String> = Vec::new();
    for m in &qualifying {
        if !concept_ids.contains(&m.concept.id) {
            concept_ids.push(m.concept.id.clone());
        }
    }

    let mut links: HashMap<String, Vec<EntityLink>> = HashMap::new();
    for (batch, chunk) in concept_ids.chunks(batch_size).enumerate() {
        let fetched = store.get_linked_entities_batch(chunk).await?;
        debug!(batch, concepts = chunk.len(), linked = fetched.len(), "cross-link batch");
        links.extend(fetched);
    }

    let mut builder = SeedBuilder::default();
    for m in qualifying {
        let linked = links
            .get(&m.concept.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        builder.add_concept(
            &m.concept.id,
            m.score,
            linked.iter().map(|l| l.entity_id.as_str()),
        );
    }

    let result = builder.finish();
    debug!(
        concepts_searched = result.stats.concepts_searched,
        entities_found = result.stats.entities_found,
        concepts_without_links = result.stats.concepts_without_links,
        batch_size,
        "seeds extracted via cross-link store"
    );
    Ok(result)
}

/// Batched seed extraction bound to a cross-link store and configuration.
///
/// Uses `executor.min_semantic_score` as the floor and
/// `seeds.cross_link_batch_size` as the chunk size.
pub struct CrossLinkSeedExtractor<S> {
    store: S,
    min_score: f64,
    batch_size: usize,
}

impl<S: ICrossLinkStore> CrossLinkSeedExtractor<S> {
    pub fn new(store: S, config: &PrismConfig) -> PrismResult<Self> {
        config.validate().map_err(|e| e.at(Stage::Config))?;
        Ok(Self {
            store,
            min_score: config.executor.min_semantic_score,
            batch_size: config.seeds.cross_link_batch_size,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub async fn extract(&self, matches: &[SemanticMatch]) -> PrismResult<SeedExtractionResult> {
        extract_seeds_batched(&self.store, matches, self.min_score, self.batch_size).await
    }
}

fn validate(
    matches: &[SemanticMatch],
    min_score: f64,
    batch_size: usize,
) -> Result<(), ValidationError> {
    if batch_size < 1 {
        return Err(ValidationError::InvalidBatchSize { size: batch_size });
    }
    ValidationError::check_range("min_score", min_score, 0.0, 1.0)?;
    for (index, m) in matches.iter().enumerate() {
        m.validate(index)?;
    }
    Ok(())
}
