use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_BRANCH_TIMEOUT_MS, MAX_TEMPORAL_WINDOW_DAYS};
use crate::errors::ValidationError;

/// Graph expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Half-width of the temporal lookup window around "now", in days.
    pub temporal_window_days: u32,
    /// Optional budget per expansion branch. `None` waits for every branch.
    pub branch_timeout_ms: Option<u64>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            temporal_window_days: defaults::DEFAULT_TEMPORAL_WINDOW_DAYS,
            branch_timeout_ms: None,
        }
    }
}

impl ExpansionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range(
            "temporal_window_days",
            f64::from(self.temporal_window_days),
            1.0,
            f64::from(MAX_TEMPORAL_WINDOW_DAYS),
        )?;
        if let Some(ms) = self.branch_timeout_ms {
            ValidationError::check_range(
                "branch_timeout_ms",
                ms as f64,
                1.0,
                MAX_BRANCH_TIMEOUT_MS as f64,
            )?;
        }
        Ok(())
    }
}
