// Executor
pub const DEFAULT_SEMANTIC_TOP_K: usize = 10;
pub const DEFAULT_MIN_SEMANTIC_SCORE: f64 = 0.5;
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

// Merger
pub const DEFAULT_MULTI_VIEW_BOOST: f64 = 1.5;
pub const DEFAULT_MIN_NODES_PER_VIEW: usize = 3;
pub const DEFAULT_MAX_NODES_PER_VIEW: usize = 50;

// Seeds
pub const DEFAULT_CROSS_LINK_BATCH_SIZE: usize = 50;

// Expansion
pub const DEFAULT_TEMPORAL_WINDOW_DAYS: u32 = 365;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 100;
