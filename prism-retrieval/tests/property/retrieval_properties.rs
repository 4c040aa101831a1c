use prism_core::models::EnrichedSemanticMatch;
use prism_retrieval::extract_seeds;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use test_fixtures::builders::enriched;

fn arb_matches() -> impl Strategy<Value = Vec<EnrichedSemanticMatch>> {
    prop::collection::vec(
        (0.0f64..=1.0, prop::collection::vec(0u8..12, 0..5)),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (score, links))| {
                let ids: Vec<String> = links.iter().map(|l| format!("e{l}")).collect();
                let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                enriched(&format!("c{i}"), score, &refs)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn no_seed_below_floor(matches in arb_matches(), min_score in 0.0f64..=1.0) {
        let result = extract_seeds(&matches, min_score).unwrap();
        for seed in &result.entity_seeds {
            prop_assert!(seed.semantic_score >= min_score);
        }
    }

    #[test]
    fn seeds_are_unique_and_owned_by_first_qualifier(
        matches in arb_matches(),
        min_score in 0.0f64..=1.0,
    ) {
        let result = extract_seeds(&matches, min_score).unwrap();

        let ids: HashSet<_> = result.entity_seeds.iter().map(|s| &s.entity_id).collect();
        prop_assert_eq!(ids.len(), result.entity_seeds.len());
        prop_assert_eq!(result.stats.entities_found, result.entity_seeds.len());

        let mut first_owner: HashMap<&str, &str> = HashMap::new();
        for m in matches.iter().filter(|m| m.score >= min_score) {
            for id in &m.linked_entity_ids {
                first_owner.entry(id.as_str()).or_insert(m.concept.id.as_str());
            }
        }
        prop_assert_eq!(first_owner.len(), result.entity_seeds.len());
        for seed in &result.entity_seeds {
            prop_assert_eq!(first_owner[seed.entity_id.as_str()], seed.source_concept_id.as_str());
        }
    }
}
