//! Property tests for entity expansion invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use prism_expansion::{EntityExpander, IGraphExpander};
use test_fixtures::builders::relationship;
use test_fixtures::InMemoryEntityStore;

fn run<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(fut)
}

fn edge_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..30)
}

proptest! {
    #[test]
    fn entity_view_is_unique_and_best_first(edges in edge_strategy(), depth in 0usize..6) {
        let rels = edges
            .iter()
            .map(|(s, t)| relationship(&format!("n{s}"), &format!("n{t}")))
            .collect();
        let expander = EntityExpander::new(InMemoryEntityStore::new(rels));
        let outcome = run(expander.expand(&["n0".to_string()], depth));

        let nodes = &outcome.view.nodes;
        let unique: HashSet<&str> = nodes.iter().map(|n| n.uuid.as_str()).collect();
        prop_assert_eq!(unique.len(), nodes.len());

        for pair in nodes.windows(2) {
            prop_assert!(pair[0].effective_score() >= pair[1].effective_score());
        }
        for node in nodes {
            let score = node.effective_score();
            prop_assert!(score > 0.0 && score <= 1.0);
            prop_assert!(score >= 1.0 / depth.max(1) as f64 - 1e-12);
        }
        // One batched lookup per ring at most.
        prop_assert!(expander.store().call_count() <= depth);
    }
}
