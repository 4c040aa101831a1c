use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_SEMANTIC_TOP_K, MAX_TIMEOUT_MS, MIN_SEMANTIC_TOP_K, MIN_TIMEOUT_MS};
use crate::errors::ValidationError;

/// Executor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Number of concepts requested from semantic search, 1–100.
    pub semantic_top_k: usize,
    /// Similarity floor for a concept to contribute entity seeds, 0.0–1.0.
    pub min_semantic_score: f64,
    /// Budget for the semantic-search stage in milliseconds, 100–60000.
    pub timeout_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            semantic_top_k: defaults::DEFAULT_SEMANTIC_TOP_K,
            min_semantic_score: defaults::DEFAULT_MIN_SEMANTIC_SCORE,
            timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ExecutorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range(
            "semantic_top_k",
            self.semantic_top_k as f64,
            MIN_SEMANTIC_TOP_K as f64,
            MAX_SEMANTIC_TOP_K as f64,
        )?;
        ValidationError::check_range("min_semantic_score", self.min_semantic_score, 0.0, 1.0)?;
        ValidationError::check_range(
            "timeout_ms",
            self.timeout_ms as f64,
            MIN_TIMEOUT_MS as f64,
            MAX_TIMEOUT_MS as f64,
        )?;
        Ok(())
    }
}
