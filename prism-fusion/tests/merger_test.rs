use prism_core::config::MergerConfig;
use prism_core::errors::ValidationError;
use prism_core::models::{GraphView, NodeData, ScoredNode, ViewSource};
use prism_fusion::Merger;
use test_fixtures::builders::{entity, view};

fn merger(boost: f64, max_nodes: usize) -> Merger {
    Merger::new(MergerConfig {
        multi_view_boost: boost,
        min_nodes_per_view: 3,
        max_nodes_per_view: max_nodes,
    })
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rejects_out_of_range_config() {
    let bad_boost = Merger::new(MergerConfig {
        multi_view_boost: 0.5,
        ..Default::default()
    });
    assert!(matches!(
        bad_boost,
        Err(ValidationError::OutOfRange { field: "multi_view_boost", .. })
    ));

    let bad_max = Merger::new(MergerConfig {
        max_nodes_per_view: 0,
        ..Default::default()
    });
    assert!(matches!(
        bad_max,
        Err(ValidationError::OutOfRange { field: "max_nodes_per_view", .. })
    ));
}

#[test]
fn empty_input_yields_empty_subgraph() {
    let merged = merger(1.5, 50).merge(&[]).unwrap();
    assert!(merged.is_empty());
    assert_eq!(merged.view_contributions.total(), 0);
}

#[test]
fn single_view_keeps_scores_and_order() {
    let v = view(ViewSource::Semantic, &[("a", 0.9), ("b", 0.7), ("c", 0.4)]);
    let merged = merger(1.5, 50).merge(&[v]).unwrap();

    let ids: Vec<_> = merged.nodes.iter().map(|n| n.uuid.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(merged.nodes.iter().all(|n| n.view_count == 1));
    assert!(approx(merged.nodes[0].final_score, 0.9));
}

#[test]
fn two_view_boost_doubles_average() {
    let merged = merger(2.0, 50)
        .merge(&[
            view(ViewSource::Semantic, &[("x", 0.8)]),
            view(ViewSource::Entity, &[("x", 0.8)]),
        ])
        .unwrap();

    assert_eq!(merged.len(), 1);
    let x = &merged.nodes[0];
    assert_eq!(x.view_count, 2);
    assert!(approx(x.final_score, 1.6));
    assert_eq!(x.views, vec![ViewSource::Semantic, ViewSource::Entity]);
}

#[test]
fn three_view_boost_is_exponential() {
    let merged = merger(1.5, 50)
        .merge(&[
            view(ViewSource::Entity, &[("x", 0.6)]),
            view(ViewSource::Temporal, &[("x", 0.6)]),
            view(ViewSource::Causal, &[("x", 0.6)]),
        ])
        .unwrap();

    assert!(approx(merged.nodes[0].final_score, 1.35));
    assert_eq!(merged.nodes[0].view_count, 3);
}

#[test]
fn multi_view_node_outranks_stronger_single_view_node() {
    let merged = merger(1.5, 50)
        .merge(&[
            view(ViewSource::Semantic, &[("solo", 0.9), ("shared", 0.7)]),
            view(ViewSource::Entity, &[("shared", 0.7)]),
        ])
        .unwrap();

    assert_eq!(merged.nodes[0].uuid, "shared");
    assert!(approx(merged.nodes[0].final_score, 1.05));
}

#[test]
fn truncation_caps_each_view_before_accumulation() {
    let merged = merger(1.5, 2)
        .merge(&[
            view(ViewSource::Semantic, &[("a", 0.9), ("b", 0.8), ("c", 0.7)]),
            view(ViewSource::Entity, &[("c", 1.0), ("d", 0.5)]),
        ])
        .unwrap();

    assert_eq!(merged.view_contributions.semantic, 2);
    assert_eq!(merged.view_contributions.entity, 2);
    // c was truncated out of the semantic view, so it is single-view.
    let c = merged.get("c").unwrap();
    assert_eq!(c.view_count, 1);
    assert_eq!(c.views, vec![ViewSource::Entity]);
}

#[test]
fn missing_score_defaults_to_one() {
    let unscored = GraphView::new(
        ViewSource::Entity,
        vec![ScoredNode::unscored("n", NodeData::Entity(entity("n")))],
    );
    let merged = merger(1.5, 50).merge(&[unscored]).unwrap();
    assert!(approx(merged.nodes[0].final_score, 1.0));
}

#[test]
fn payload_comes_from_first_occurrence() {
    let first = GraphView::new(
        ViewSource::Semantic,
        vec![ScoredNode::new("n", NodeData::Entity(entity("first")), 0.5)],
    );
    let second = GraphView::new(
        ViewSource::Entity,
        vec![ScoredNode::new("n", NodeData::Entity(entity("second")), 0.5)],
    );
    let merged = merger(1.5, 50).merge(&[first, second]).unwrap();
    assert_eq!(merged.nodes[0].data.label(), "Entity first");
}

#[test]
fn duplicate_uuid_within_one_view_counts_once() {
    let merged = merger(2.0, 50)
        .merge(&[view(ViewSource::Entity, &[("a", 0.5), ("a", 0.9)])])
        .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.nodes[0].view_count, 1);
    assert!(approx(merged.nodes[0].final_score, 0.5));
    assert_eq!(merged.view_contributions.entity, 1);
}

#[test]
fn ties_keep_first_occurrence_order() {
    let merged = merger(1.5, 50)
        .merge(&[
            view(ViewSource::Semantic, &[("b", 0.5)]),
            view(ViewSource::Entity, &[("a", 0.5)]),
        ])
        .unwrap();
    let ids: Vec<_> = merged.nodes.iter().map(|n| n.uuid.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn malformed_view_is_rejected() {
    let bad = view(ViewSource::Entity, &[("a", f64::NAN)]);
    let err = merger(1.5, 50).merge(&[bad]).unwrap_err();
    assert!(matches!(err, ValidationError::MalformedView { index: 0, .. }));

    let blank = view(ViewSource::Entity, &[(" ", 0.5)]);
    assert!(merger(1.5, 50).merge(&[blank]).is_err());
}

fn sample() -> (Merger, prism_core::MergedSubgraph) {
    let m = merger(1.5, 50);
    let merged = m
        .merge(&[
            view(ViewSource::Semantic, &[("a", 0.9), ("b", 0.6), ("c", 0.2)]),
            view(ViewSource::Entity, &[("b", 0.6), ("d", 0.5)]),
            view(ViewSource::Causal, &[("b", 0.6)]),
        ])
        .unwrap();
    (m, merged)
}

#[test]
fn top_n_truncates_in_rank_order() {
    let (m, merged) = sample();
    let top = m.top_n(&merged, 2);
    let ids: Vec<_> = top.nodes.iter().map(|n| n.uuid.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(top.view_contributions, merged.view_contributions);

    assert!(m.top_n(&merged, 0).is_empty());
    assert_eq!(m.top_n(&merged, 100).len(), merged.len());
}

#[test]
fn filter_by_view_count_keeps_confirmed_nodes() {
    let (m, merged) = sample();
    let confirmed = m.filter_by_view_count(&merged, 2).unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed.nodes[0].uuid, "b");

    assert_eq!(m.filter_by_view_count(&merged, 1).unwrap().len(), merged.len());
    assert!(m.filter_by_view_count(&merged, 0).is_err());
}

#[test]
fn filter_by_score_is_inclusive() {
    let (m, merged) = sample();
    let kept = m.filter_by_score(&merged, 0.5).unwrap();
    let ids: Vec<_> = kept.nodes.iter().map(|n| n.uuid.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "d"]);

    assert!(m.filter_by_score(&merged, -0.1).is_err());
    assert!(m.filter_by_score(&merged, f64::NAN).is_err());
}

#[test]
fn get_nodes_from_view_selects_by_source() {
    let (m, merged) = sample();
    let entity_nodes = m.get_nodes_from_view(&merged, ViewSource::Entity);
    let ids: Vec<_> = entity_nodes.nodes.iter().map(|n| n.uuid.as_str()).collect();
    assert_eq!(ids, vec!["b", "d"]);
    assert!(m.get_nodes_from_view(&merged, ViewSource::Temporal).is_empty());
}

#[test]
fn has_minimum_nodes_checks_threshold_and_shape() {
    let m = merger(1.5, 50);
    assert!(m.has_minimum_nodes(&view(
        ViewSource::Entity,
        &[("a", 0.1), ("b", 0.1), ("c", 0.1)]
    )));
    assert!(!m.has_minimum_nodes(&view(ViewSource::Entity, &[("a", 0.1)])));
    assert!(!m.has_minimum_nodes(&view(
        ViewSource::Entity,
        &[("a", -1.0), ("b", 0.1), ("c", 0.1)]
    )));
}
