use std::collections::HashMap;

use prism_core::models::Relationship;
use prism_core::traits::IEntityStore;
use prism_core::StoreError;

use super::{Behavior, CallLog};

/// Relationship list indexed by both endpoints.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    relationships: Vec<Relationship>,
    behavior: Behavior,
    calls: CallLog,
}

impl InMemoryEntityStore {
    pub fn new(relationships: Vec<Relationship>) -> Self {
        Self {
            relationships,
            ..Default::default()
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Id batches received, one per call.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.calls.batches()
    }

    pub fn call_count(&self) -> usize {
        self.calls.batches().len()
    }
}

impl IEntityStore for InMemoryEntityStore {
    async fn get_relationships_batch(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<Relationship>>, StoreError> {
        let call = self.calls.record(ids);
        self.behavior.apply("entity", call).await?;

        let mut out: HashMap<String, Vec<Relationship>> = HashMap::new();
        for id in ids {
            let touching: Vec<Relationship> = self
                .relationships
                .iter()
                .filter(|r| &r.source.id == id || &r.target.id == id)
                .cloned()
                .collect();
            if !touching.is_empty() {
                out.insert(id.clone(), touching);
            }
        }
        Ok(out)
    }
}
