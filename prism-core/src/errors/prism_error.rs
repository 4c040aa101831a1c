use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ConfigError, ExecutorError, StoreError, ValidationError};

/// Pipeline stage a validation failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Config,
    SeedExtraction,
    Execution,
    Merge,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::SeedExtraction => "seed_extraction",
            Self::Execution => "execution",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error returned by every fallible public operation.
#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error("validation failed during {stage}: {source}")]
    Validation {
        stage: Stage,
        #[source]
        source: ValidationError,
    },

    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl PrismError {
    /// The stage a validation failure belongs to, if this is one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Validation { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// True when the semantic-search stage ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Executor(ExecutorError::SemanticSearchTimeout { .. })
        )
    }
}

/// Convenience alias used across the workspace.
pub type PrismResult<T> = Result<T, PrismError>;
