use prism_core::errors::ValidationError;
use prism_core::models::{EnrichedSemanticMatch, SeedExtractionResult};
use tracing::debug;

use super::builder::SeedBuilder;

/// Extract entity seeds from matches that already carry their entity links.
///
/// Matches scored below `min_score` are skipped entirely. Every qualifying
/// concept is recorded in `concept_ids`, linked or not. An entity linked by
/// several concepts is seeded once, owned by the first qualifying match.
pub fn extract_seeds(
    matches: &[EnrichedSemanticMatch],
    min_score: f64,
) -> Result<SeedExtractionResult, ValidationError> {
    ValidationError::check_range("min_score", min_score, 0.0, 1.0)?;
    for (index, m) in matches.iter().enumerate() {
        m.validate(index)?;
    }

    let mut builder = SeedBuilder::default();
    for m in matches.iter().filter(|m| m.score >= min_score) {
        builder.add_concept(
            &m.concept.id,
            m.score,
            m.linked_entity_ids.iter().map(String::as_str),
        );
    }

    let result = builder.finish();
    debug!(
        matches = matches.len(),
        concepts_searched = result.stats.concepts_searched,
        entities_found = result.stats.entities_found,
        concepts_without_links = result.stats.concepts_without_links,
        "seeds extracted"
    );
    Ok(result)
}
