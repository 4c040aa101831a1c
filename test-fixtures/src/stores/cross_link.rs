use std::collections::HashMap;

use prism_core::models::EntityLink;
use prism_core::traits::ICrossLinkStore;
use prism_core::StoreError;

use super::{Behavior, CallLog};

/// Concept→entity links keyed by concept id.
#[derive(Debug, Default)]
pub struct InMemoryCrossLinkStore {
    links: HashMap<String, Vec<EntityLink>>,
    behavior: Behavior,
    calls: CallLog,
}

impl InMemoryCrossLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `concept_id` to `entity_ids`, appending to existing links.
    pub fn link(mut self, concept_id: &str, entity_ids: &[&str]) -> Self {
        let entry = self.links.entry(concept_id.to_string()).or_default();
        entry.extend(entity_ids.iter().map(|id| EntityLink {
            entity_id: id.to_string(),
            entity_name: None,
        }));
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.calls.batches()
    }
}

impl ICrossLinkStore for InMemoryCrossLinkStore {
    async fn get_linked_entities_batch(
        &self,
        concept_ids: &[String],
    ) -> Result<HashMap<String, Vec<EntityLink>>, StoreError> {
        let call = self.calls.record(concept_ids);
        self.behavior.apply("cross_link", call).await?;

        Ok(concept_ids
            .iter()
            .filter_map(|id| self.links.get(id).map(|links| (id.clone(), links.clone())))
            .collect())
    }
}
