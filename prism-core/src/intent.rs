//! Classified query intent, supplied by the external intent classifier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_DEPTH_HINT, MIN_DEPTH_HINT};
use crate::errors::ValidationError;

/// The broad question shape the classifier assigned to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    Factual,
    Relational,
    Temporal,
    Causal,
    Exploratory,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Relational => "relational",
            Self::Temporal => "temporal",
            Self::Causal => "causal",
            Self::Exploratory => "exploratory",
        }
    }
}

/// How many hops each expander may traverse. Each field is 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DepthHints {
    pub entity: u8,
    pub temporal: u8,
    pub causal: u8,
}

impl Default for DepthHints {
    fn default() -> Self {
        Self {
            entity: 2,
            temporal: 2,
            causal: 2,
        }
    }
}

impl DepthHints {
    pub fn new(entity: u8, temporal: u8, causal: u8) -> Self {
        Self {
            entity,
            temporal,
            causal,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("entity", self.entity),
            ("temporal", self.temporal),
            ("causal", self.causal),
        ] {
            if !(MIN_DEPTH_HINT..=MAX_DEPTH_HINT).contains(&value) {
                return Err(ValidationError::InvalidDepthHint { field, value });
            }
        }
        Ok(())
    }
}

/// A validated intent object as produced by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Intent {
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    /// Entity mentions the classifier spotted in the query text.
    #[serde(default)]
    pub entities: Vec<String>,
    /// Free-form time expressions ("last quarter", "2019").
    #[serde(default)]
    pub temporal_hints: Vec<String>,
    #[serde(default)]
    pub depth_hints: DepthHints,
    /// Classifier confidence, 0.0–1.0.
    pub confidence: f64,
}

impl Intent {
    /// An intent with no hints and default depths.
    pub fn new(intent_type: IntentType, confidence: f64) -> Self {
        Self {
            intent_type,
            entities: Vec::new(),
            temporal_hints: Vec::new(),
            depth_hints: DepthHints::default(),
            confidence,
        }
    }

    pub fn with_depth_hints(mut self, depth_hints: DepthHints) -> Self {
        self.depth_hints = depth_hints;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.depth_hints.validate()?;
        if self.confidence.is_nan() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::MalformedIntent {
                reason: format!("confidence {} is outside [0, 1]", self.confidence),
            });
        }
        if self.entities.iter().any(|e| e.trim().is_empty()) {
            return Err(ValidationError::MalformedIntent {
                reason: "entity hints must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
