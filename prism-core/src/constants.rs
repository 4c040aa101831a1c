/// Prism system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score assigned to a node whose producer left the score unset.
pub const DEFAULT_NODE_SCORE: f64 = 1.0;

/// Inclusive bounds for every per-graph depth hint.
pub const MIN_DEPTH_HINT: u8 = 1;
pub const MAX_DEPTH_HINT: u8 = 5;

/// Inclusive bounds for `ExecutorConfig::semantic_top_k`.
pub const MIN_SEMANTIC_TOP_K: usize = 1;
pub const MAX_SEMANTIC_TOP_K: usize = 100;

/// Inclusive bounds for `ExecutorConfig::timeout_ms`.
pub const MIN_TIMEOUT_MS: u64 = 100;
pub const MAX_TIMEOUT_MS: u64 = 60_000;

/// Inclusive bounds for `MergerConfig::multi_view_boost`.
pub const MIN_MULTI_VIEW_BOOST: f64 = 1.0;
pub const MAX_MULTI_VIEW_BOOST: f64 = 10.0;

/// Upper bound for an optional per-branch expansion timeout.
pub const MAX_BRANCH_TIMEOUT_MS: u64 = 60_000;

/// Upper bound for `ExpansionConfig::temporal_window_days` (about a century).
pub const MAX_TEMPORAL_WINDOW_DAYS: u32 = 36_500;
