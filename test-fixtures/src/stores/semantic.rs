use prism_core::models::EnrichedSemanticMatch;
use prism_core::traits::ISemanticSearch;
use prism_core::StoreError;

use super::{Behavior, CallLog};

/// Returns a fixed match list, similarity-descending, truncated to `top_k`.
#[derive(Debug, Default)]
pub struct InMemorySemanticSearch {
    matches: Vec<EnrichedSemanticMatch>,
    behavior: Behavior,
    calls: CallLog,
}

impl InMemorySemanticSearch {
    pub fn new(matches: Vec<EnrichedSemanticMatch>) -> Self {
        Self {
            matches,
            ..Default::default()
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Queries received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.calls.batches().into_iter().flatten().collect()
    }
}

impl ISemanticSearch for InMemorySemanticSearch {
    async fn search_with_entities(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<EnrichedSemanticMatch>, StoreError> {
        let call = self.calls.record(&[query.to_string()]);
        self.behavior.apply("semantic", call).await?;

        let mut matches = self.matches.clone();
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);
        Ok(matches)
    }
}
