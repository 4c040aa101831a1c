use std::collections::HashSet;

use prism_core::config::MergerConfig;
use prism_core::models::{GraphView, NodeData, ScoredNode, ViewSource};
use prism_fusion::Merger;
use proptest::prelude::*;
use test_fixtures::builders::entity;

fn arb_view(source: ViewSource) -> impl Strategy<Value = GraphView> {
    prop::collection::vec((0u8..20, 0.0f64..1.0), 0..15).prop_map(move |pairs| {
        GraphView::new(
            source,
            pairs
                .into_iter()
                .map(|(id, score)| {
                    let uuid = format!("n{id}");
                    ScoredNode::new(uuid.clone(), NodeData::Entity(entity(&uuid)), score)
                })
                .collect(),
        )
    })
}

fn arb_views() -> impl Strategy<Value = Vec<GraphView>> {
    (
        arb_view(ViewSource::Semantic),
        arb_view(ViewSource::Entity),
        arb_view(ViewSource::Temporal),
        arb_view(ViewSource::Causal),
    )
        .prop_map(|(s, e, t, c)| vec![s, e, t, c])
}

proptest! {
    #[test]
    fn merged_output_is_sorted_and_unique(
        views in arb_views(),
        boost in 1.0f64..10.0,
        max_nodes in 1usize..20,
    ) {
        let merger = Merger::new(MergerConfig {
            multi_view_boost: boost,
            min_nodes_per_view: 0,
            max_nodes_per_view: max_nodes,
        }).unwrap();
        let merged = merger.merge(&views).unwrap();

        let uuids: HashSet<_> = merged.nodes.iter().map(|n| n.uuid.as_str()).collect();
        prop_assert_eq!(uuids.len(), merged.len());

        for pair in merged.nodes.windows(2) {
            prop_assert!(pair[0].final_score >= pair[1].final_score);
        }

        for view in &views {
            prop_assert!(merged.view_contributions.get(view.source) <= max_nodes);
        }

        for node in &merged.nodes {
            prop_assert!(node.view_count >= 1 && node.view_count <= views.len());
            prop_assert_eq!(node.view_count, node.views.len());
        }
    }

    #[test]
    fn filters_return_subsets(views in arb_views(), n in 0usize..30, min_score in 0.0f64..3.0) {
        let merger = Merger::new(MergerConfig::default()).unwrap();
        let merged = merger.merge(&views).unwrap();

        prop_assert_eq!(merger.top_n(&merged, n).len(), merged.len().min(n));
        let by_score = merger.filter_by_score(&merged, min_score).unwrap();
        prop_assert!(by_score.nodes.iter().all(|node| node.final_score >= min_score));
        let confirmed = merger.filter_by_view_count(&merged, 2).unwrap();
        prop_assert!(confirmed.len() <= merged.len());
    }
}
