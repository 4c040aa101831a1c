use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_MULTI_VIEW_BOOST, MIN_MULTI_VIEW_BOOST};
use crate::errors::ValidationError;

/// Merger configuration.
///
/// `min_nodes_per_view` is unsigned, so the "must not be negative" rule is
/// enforced by the type (a negative TOML value fails to parse).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerConfig {
    /// Exponential boost per additional confirming view, 1.0–10.0.
    pub multi_view_boost: f64,
    /// Node count below which a view is considered sparse.
    pub min_nodes_per_view: usize,
    /// Per-view truncation applied before accumulation, at least 1.
    pub max_nodes_per_view: usize,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            multi_view_boost: defaults::DEFAULT_MULTI_VIEW_BOOST,
            min_nodes_per_view: defaults::DEFAULT_MIN_NODES_PER_VIEW,
            max_nodes_per_view: defaults::DEFAULT_MAX_NODES_PER_VIEW,
        }
    }
}

impl MergerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range(
            "multi_view_boost",
            self.multi_view_boost,
            MIN_MULTI_VIEW_BOOST,
            MAX_MULTI_VIEW_BOOST,
        )?;
        if self.max_nodes_per_view < 1 {
            return Err(ValidationError::OutOfRange {
                field: "max_nodes_per_view",
                value: self.max_nodes_per_view as f64,
                min: 1.0,
                max: f64::INFINITY,
            });
        }
        Ok(())
    }
}
