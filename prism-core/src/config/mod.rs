//! Layered configuration for the retrieval core.
//!
//! Every section is `#[serde(default)]`, so a partial (or empty) TOML
//! document yields a fully populated config. [`PrismConfig::from_toml`]
//! validates the result before returning it.

pub mod defaults;
mod executor_config;
mod expansion_config;
mod merger_config;
mod observability_config;
mod seed_config;

pub use executor_config::ExecutorConfig;
pub use expansion_config::ExpansionConfig;
pub use merger_config::MergerConfig;
pub use observability_config::ObservabilityConfig;
pub use seed_config::SeedConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PrismResult, Stage, ValidationError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub executor: ExecutorConfig,
    pub merger: MergerConfig,
    pub seeds: SeedConfig,
    pub expansion: ExpansionConfig,
    pub observability: ObservabilityConfig,
}

impl PrismConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> PrismResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate().map_err(|e| e.at(Stage::Config))?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.executor.validate()?;
        self.merger.validate()?;
        self.seeds.validate()?;
        self.expansion.validate()?;
        Ok(())
    }
}
