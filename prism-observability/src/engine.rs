//! [`ObservabilityEngine`]: owns the degradation tracker and query log.

use prism_core::config::ObservabilityConfig;
use prism_core::models::{BranchStatus, DegradationEvent, ExecutionResult};
use prism_core::IntentType;

use crate::degradation::DegradationTracker;
use crate::query_log::{QueryLog, QueryLogEntry};

/// Central observability sink the retrieval engine reports into.
#[derive(Debug, Default)]
pub struct ObservabilityEngine {
    pub degradation: DegradationTracker,
    pub query_log: QueryLog,
}

impl ObservabilityEngine {
    pub fn new(config: &ObservabilityConfig) -> Self {
        Self {
            degradation: DegradationTracker::new(),
            query_log: QueryLog::with_capacity(config.query_log_capacity),
        }
    }

    /// Record one finished retrieval: a query-log entry, plus a degradation
    /// event per failed branch and a recovery for every healthy one.
    pub fn observe(&mut self, query: &str, intent: IntentType, result: &ExecutionResult) {
        for branch in &result.branches {
            let component = format!("{}_store", branch.source);
            match &branch.status {
                BranchStatus::Degraded { reason } => {
                    self.degradation.record(DegradationEvent::now(
                        component,
                        reason.clone(),
                        "empty_view",
                    ));
                }
                BranchStatus::TimedOut { timeout_ms } => {
                    self.degradation.record(DegradationEvent::now(
                        component,
                        format!("timed out after {timeout_ms}ms"),
                        "empty_view",
                    ));
                }
                BranchStatus::Ok | BranchStatus::Empty => {
                    self.degradation.mark_recovered(&component);
                }
                BranchStatus::Skipped => {}
            }
        }
        self.query_log
            .record(QueryLogEntry::from_result(query, intent, result));
    }

    /// Serialize a health summary to JSON.
    pub fn snapshot(&self) -> serde_json::Value {
        let active: Vec<&str> = self
            .degradation
            .active_degradations()
            .iter()
            .map(|t| t.event.component.as_str())
            .collect();
        serde_json::json!({
            "query_log_count": self.query_log.count(),
            "query_avg_latency_ms": self.query_log.avg_latency().as_millis() as u64,
            "active_degradations": active,
        })
    }
}
