use std::collections::HashMap;

use chrono::{DateTime, Utc};
use prism_core::models::EventRecord;
use prism_core::traits::ITemporalStore;
use prism_core::StoreError;

use super::{Behavior, CallLog};

/// Event list filtered by entity and window.
#[derive(Debug, Default)]
pub struct InMemoryTemporalStore {
    events: Vec<EventRecord>,
    behavior: Behavior,
    calls: CallLog,
}

impl InMemoryTemporalStore {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.batches().len()
    }
}

impl ITemporalStore for InMemoryTemporalStore {
    async fn query_timeline_for_entities(
        &self,
        ids: &[String],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, Vec<EventRecord>>, StoreError> {
        let call = self.calls.record(ids);
        self.behavior.apply("temporal", call).await?;

        let mut out: HashMap<String, Vec<EventRecord>> = HashMap::new();
        for event in &self.events {
            if ids.contains(&event.entity_id) && event.occurred_at >= from && event.occurred_at <= to
            {
                out.entry(event.entity_id.clone())
                    .or_default()
                    .push(event.clone());
            }
        }
        for events in out.values_mut() {
            events.sort_by_key(|e| e.occurred_at);
        }
        Ok(out)
    }
}
