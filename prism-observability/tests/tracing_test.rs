//! Subscriber installation is process-global, so these checks live in their
//! own test binary and run as one test.

use prism_core::config::ObservabilityConfig;
use prism_core::models::ViewSource;
use prism_observability::tracing_setup::{init, spans::names};
use prism_observability::{expansion_span, merge_span, retrieval_span};

#[test]
fn init_installs_once_and_spans_use_stable_names() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        ..Default::default()
    };
    assert!(init(&config));
    assert!(!init(&config), "second install must be a no-op");

    let retrieval = retrieval_span!("abc123", "factual");
    let expansion = expansion_span!(ViewSource::Entity, 3usize, 2u8);
    let merge = merge_span!(4usize);

    assert_eq!(retrieval.metadata().map(|m| m.name()), Some(names::RETRIEVAL));
    assert_eq!(expansion.metadata().map(|m| m.name()), Some(names::EXPANSION));
    assert_eq!(merge.metadata().map(|m| m.name()), Some(names::MERGE));
}
