//! Temporal expansion: a single batched time-window lookup.
//!
//! Not a graph walk; the depth hint is accepted for interface symmetry and
//! ignored. Every distinct event scores 1.0.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use prism_core::config::defaults::DEFAULT_TEMPORAL_WINDOW_DAYS;
use prism_core::models::{ExpansionOutcome, GraphView, NodeData, ScoredNode, ViewSource};
use prism_core::traits::ITemporalStore;
use tracing::{debug, warn};

use crate::expander::{dedup_ids, IGraphExpander};

/// Looks up events within ±`window_days` of now for every seed entity.
pub struct TemporalExpander<S> {
    store: S,
    window_days: u32,
}

impl<S: ITemporalStore> TemporalExpander<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            window_days: DEFAULT_TEMPORAL_WINDOW_DAYS,
        }
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ITemporalStore> IGraphExpander for TemporalExpander<S> {
    fn source(&self) -> ViewSource {
        ViewSource::Temporal
    }

    async fn expand(&self, entity_ids: &[String], depth: usize) -> ExpansionOutcome {
        let ids = dedup_ids(entity_ids);
        if ids.is_empty() {
            return ExpansionOutcome::ok(GraphView::empty(ViewSource::Temporal));
        }

        let Some((from, to)) = window_around(Utc::now(), self.window_days) else {
            warn!(
                window_days = self.window_days,
                "temporal window outside the representable date range"
            );
            return ExpansionOutcome::degraded(
                GraphView::empty(ViewSource::Temporal),
                format!("temporal window of {} days is out of range", self.window_days),
            );
        };

        let timeline = match self.store.query_timeline_for_entities(&ids, from, to).await {
            Ok(timeline) => timeline,
            Err(e) => {
                warn!(entities = ids.len(), error = %e, "temporal lookup failed");
                return ExpansionOutcome::degraded(
                    GraphView::empty(ViewSource::Temporal),
                    e.to_string(),
                );
            }
        };

        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for id in &ids {
            for event in timeline.get(id).into_iter().flatten() {
                if seen.insert(event.id.clone()) {
                    nodes.push(ScoredNode::new(
                        event.id.clone(),
                        NodeData::Event(event.clone()),
                        1.0,
                    ));
                }
            }
        }

        debug!(
            entities = ids.len(),
            events = nodes.len(),
            depth_hint = depth,
            "temporal lookup complete"
        );
        ExpansionOutcome::ok(GraphView::new(ViewSource::Temporal, nodes))
    }
}

/// `now ± window_days`, or `None` when either edge overflows chrono's range.
fn window_around(now: DateTime<Utc>, window_days: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let window = Duration::try_days(i64::from(window_days))?;
    Some((now.checked_sub_signed(window)?, now.checked_add_signed(window)?))
}
