//! # prism-observability
//!
//! Tracing setup, span macros, degradation tracking, and a bounded query log.
//! The retrieval core never fails because of observability: everything here
//! is best-effort.

pub mod degradation;
pub mod engine;
pub mod query_log;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use engine::ObservabilityEngine;
pub use query_log::{QueryLog, QueryLogEntry};
