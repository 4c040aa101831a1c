use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ValidationError;

/// Seed extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Concepts per cross-link lookup in the batched extractor.
    pub cross_link_batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            cross_link_batch_size: defaults::DEFAULT_CROSS_LINK_BATCH_SIZE,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cross_link_batch_size < 1 {
            return Err(ValidationError::InvalidBatchSize {
                size: self.cross_link_batch_size,
            });
        }
        Ok(())
    }
}
