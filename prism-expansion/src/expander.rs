use std::collections::HashSet;
use std::sync::Arc;

use prism_core::models::{ExpansionOutcome, ViewSource};

/// A retrieval strategy that grows a view outward from seed entities.
#[allow(async_fn_in_trait)]
pub trait IGraphExpander: Send + Sync {
    /// The view tag this expander produces.
    fn source(&self) -> ViewSource;

    /// Expand from `entity_ids` up to `depth` hops. Never fails: store errors
    /// surface as [`ExpansionOutcome::degradation`].
    async fn expand(&self, entity_ids: &[String], depth: usize) -> ExpansionOutcome;
}

impl<T: IGraphExpander + ?Sized> IGraphExpander for Arc<T> {
    fn source(&self) -> ViewSource {
        (**self).source()
    }

    async fn expand(&self, entity_ids: &[String], depth: usize) -> ExpansionOutcome {
        (**self).expand(entity_ids, depth).await
    }
}

/// Drop duplicate ids, keeping first-occurrence order.
pub fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let ids: Vec<String> = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedup_ids(&ids), vec!["b", "a", "c"]);
    }
}
