use super::{PrismError, Stage};

/// Malformed input or out-of-range configuration. Raised before any I/O.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("semantic match at index {index} is malformed: {reason}")]
    MalformedMatch { index: usize, reason: String },

    #[error("graph view at index {index} is malformed: {reason}")]
    MalformedView { index: usize, reason: String },

    #[error("batch size must be at least 1, got {size}")]
    InvalidBatchSize { size: usize },

    #[error("depth hint {field} = {value} is out of range [1, 5]")]
    InvalidDepthHint { field: &'static str, value: u8 },

    #[error("intent is malformed: {reason}")]
    MalformedIntent { reason: String },
}

impl ValidationError {
    /// Attribute this failure to a pipeline stage.
    pub fn at(self, stage: Stage) -> PrismError {
        PrismError::Validation {
            stage,
            source: self,
        }
    }

    /// Check `value` lies in `[min, max]`, rejecting NaN.
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if value.is_nan() || value < min || value > max {
            return Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}
