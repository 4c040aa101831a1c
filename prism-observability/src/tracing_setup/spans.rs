//! Span definitions per pipeline stage: retrieval, semantic search, expansion, merge.
//!
//! Each span carries the identifying fields for its stage via the `tracing` crate.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query_hash:expr, $intent:expr) => {
        tracing::info_span!("prism.retrieval", query_hash = %$query_hash, intent = ?$intent)
    };
}

/// Create an expansion span for one branch.
#[macro_export]
macro_rules! expansion_span {
    ($source:expr, $seed_count:expr, $depth:expr) => {
        tracing::debug_span!(
            "prism.expansion",
            source = %$source,
            seed_count = $seed_count,
            depth = $depth
        )
    };
}

/// Create a merge span.
#[macro_export]
macro_rules! merge_span {
    ($view_count:expr) => {
        tracing::debug_span!("prism.merge", view_count = $view_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "prism.retrieval";
    pub const EXPANSION: &str = "prism.expansion";
    pub const MERGE: &str = "prism.merge";
}
