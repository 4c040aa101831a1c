//! Query performance logging: hashed query text, intent, per-phase latency, result shape.

use std::collections::VecDeque;
use std::time::Duration;

use prism_core::models::{ExecutionResult, PhaseTiming};
use prism_core::IntentType;
use serde::{Deserialize, Serialize};

/// A single query log entry. The query text is stored as a blake3 digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query_hash: String,
    pub intent: IntentType,
    pub timing: PhaseTiming,
    pub node_count: usize,
    pub seed_count: usize,
    pub degraded_branches: usize,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Summarize a finished retrieval, timestamped now.
    pub fn from_result(query: &str, intent: IntentType, result: &ExecutionResult) -> Self {
        Self {
            query_hash: hash_query(query),
            intent,
            timing: result.timing,
            node_count: result.merged.len(),
            seed_count: result.seeds.entity_seeds.len(),
            degraded_branches: result.degraded_branches().len(),
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.timing.total_ms)
    }
}

/// Stable digest of the trimmed query text.
pub fn hash_query(query: &str) -> String {
    blake3::hash(query.trim().as_bytes()).to_hex().to_string()
}

/// Bounded query log (oldest entries evicted first).
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    max_entries: usize,
}

impl QueryLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query_hash = %entry.query_hash,
            intent = entry.intent.as_str(),
            total_ms = entry.timing.total_ms,
            node_count = entry.node_count,
            degraded_branches = entry.degraded_branches,
            "query logged"
        );

        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    /// Average end-to-end latency across retained entries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency()).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency()).collect();
        latencies.sort();
        let idx = ((p.clamp(0.0, 1.0) * (latencies.len() - 1) as f64).round() as usize)
            .min(latencies.len() - 1);
        latencies[idx]
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(prism_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }
}
