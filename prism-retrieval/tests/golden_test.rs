//! Golden end-to-end retrieval scenarios.

use prism_core::config::PrismConfig;
use prism_core::models::BranchStatus;
use prism_retrieval::RetrievalEngine;
use test_fixtures::golden::GoldenScenario;

#[tokio::test]
async fn golden_cascade_basic() {
    let scenario = GoldenScenario::load("cascade_basic");
    let engine = RetrievalEngine::from_stores(
        scenario.semantic_store(),
        scenario.entity_store(),
        scenario.temporal_store(),
        scenario.causal_store(),
        &PrismConfig::default(),
    )
    .unwrap();

    let result = engine
        .execute(&scenario.query, &scenario.intent)
        .await
        .unwrap();
    let expected = &scenario.expected;

    assert_eq!(result.seeds.entity_ids(), expected.seed_ids, "{}", scenario.description);

    let uuids: Vec<&str> = result
        .merged
        .nodes
        .iter()
        .take(expected.top_uuids.len())
        .map(|n| n.uuid.as_str())
        .collect();
    assert_eq!(uuids, expected.top_uuids);

    assert_eq!(result.merged.view_contributions, expected.view_contributions);

    let multi: Vec<&str> = result
        .merged
        .nodes
        .iter()
        .filter(|n| n.view_count > 1)
        .map(|n| n.uuid.as_str())
        .collect();
    assert_eq!(multi, expected.multi_view_uuids);

    assert!(result
        .branches
        .iter()
        .all(|b| b.status == BranchStatus::Ok));
}

#[tokio::test]
async fn golden_scenario_survives_serialization() {
    let scenario = GoldenScenario::load("cascade_basic");
    let engine = RetrievalEngine::from_stores(
        scenario.semantic_store(),
        scenario.entity_store(),
        scenario.temporal_store(),
        scenario.causal_store(),
        &PrismConfig::default(),
    )
    .unwrap();
    let result = engine
        .execute(&scenario.query, &scenario.intent)
        .await
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["branches"][0]["source"], "entity");
    assert_eq!(json["branches"][0]["status"]["status"], "ok");
    assert_eq!(json["merged"]["nodes"][0]["uuid"], "hooli");
}
