use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::EnrichedSemanticMatch;

/// Vector-similarity search over concepts, with linked entities resolved inline.
#[allow(async_fn_in_trait)]
pub trait ISemanticSearch: Send + Sync {
    /// Top `top_k` concepts for `query`, similarity-descending.
    async fn search_with_entities(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<EnrichedSemanticMatch>, StoreError>;
}

impl<T: ISemanticSearch + ?Sized> ISemanticSearch for Arc<T> {
    async fn search_with_entities(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<EnrichedSemanticMatch>, StoreError> {
        (**self).search_with_entities(query, top_k).await
    }
}
