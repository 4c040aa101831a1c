use prism_core::config::*;
use prism_core::errors::{PrismError, Stage};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PrismConfig::from_toml("").unwrap();

    assert_eq!(config.executor.semantic_top_k, 10);
    assert_eq!(config.executor.min_semantic_score, 0.5);
    assert_eq!(config.executor.timeout_ms, 5_000);

    assert_eq!(config.merger.multi_view_boost, 1.5);
    assert_eq!(config.merger.min_nodes_per_view, 3);
    assert_eq!(config.merger.max_nodes_per_view, 50);

    assert_eq!(config.seeds.cross_link_batch_size, 50);

    assert_eq!(config.expansion.temporal_window_days, 365);
    assert!(config.expansion.branch_timeout_ms.is_none());

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[executor]
semantic_top_k = 25
timeout_ms = 1500

[merger]
multi_view_boost = 2.0

[expansion]
branch_timeout_ms = 800
"#;
    let config = PrismConfig::from_toml(toml).unwrap();
    assert_eq!(config.executor.semantic_top_k, 25);
    assert_eq!(config.executor.timeout_ms, 1_500);
    assert_eq!(config.executor.min_semantic_score, 0.5); // default
    assert_eq!(config.merger.multi_view_boost, 2.0);
    assert_eq!(config.merger.max_nodes_per_view, 50); // default
    assert_eq!(config.expansion.branch_timeout_ms, Some(800));
}

#[test]
fn config_rejects_out_of_range_values_as_config_stage() {
    for toml in [
        "[executor]\nsemantic_top_k = 0",
        "[executor]\nsemantic_top_k = 101",
        "[executor]\nmin_semantic_score = 1.5",
        "[executor]\ntimeout_ms = 99",
        "[executor]\ntimeout_ms = 60001",
        "[merger]\nmulti_view_boost = 0.5",
        "[merger]\nmulti_view_boost = 10.5",
        "[merger]\nmax_nodes_per_view = 0",
        "[seeds]\ncross_link_batch_size = 0",
        "[expansion]\ntemporal_window_days = 0",
        "[expansion]\ntemporal_window_days = 36501",
    ] {
        let err = PrismConfig::from_toml(toml).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Config), "toml: {toml}");
    }
}

#[test]
fn negative_min_nodes_per_view_fails_to_parse() {
    let err = PrismConfig::from_toml("[merger]\nmin_nodes_per_view = -1").unwrap_err();
    assert!(matches!(err, PrismError::Config(_)));
}

#[test]
fn boundary_values_are_accepted() {
    let toml = r#"
[executor]
semantic_top_k = 100
min_semantic_score = 0.0
timeout_ms = 100

[merger]
multi_view_boost = 10.0
min_nodes_per_view = 0
max_nodes_per_view = 1
"#;
    assert!(PrismConfig::from_toml(toml).is_ok());
}

#[test]
fn config_serde_roundtrip() {
    let config = PrismConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = PrismConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.executor.semantic_top_k,
        config.executor.semantic_top_k
    );
    assert_eq!(
        roundtripped.merger.multi_view_boost,
        config.merger.multi_view_boost
    );
}

#[test]
fn temporal_window_is_bounded_to_representable_dates() {
    let mut config = PrismConfig::default();
    config.expansion.temporal_window_days = 200_000_000;
    assert!(config.validate().is_err());

    config.expansion.temporal_window_days = prism_core::constants::MAX_TEMPORAL_WINDOW_DAYS;
    assert!(config.validate().is_ok());
}
