use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::StoreError;
use crate::models::{CausalLink, CausalNode, EntityLink, EventRecord, Relationship, TraversalDirection};

/// Entity-relationship graph store.
#[allow(async_fn_in_trait)]
pub trait IEntityStore: Send + Sync {
    /// Relationships touching each id, fetched in one round trip.
    async fn get_relationships_batch(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<Relationship>>, StoreError>;
}

/// Temporal (timeline) graph store.
#[allow(async_fn_in_trait)]
pub trait ITemporalStore: Send + Sync {
    /// Events per entity with `from <= occurred_at <= to`.
    async fn query_timeline_for_entities(
        &self,
        ids: &[String],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, Vec<EventRecord>>, StoreError>;
}

/// Causal graph store.
#[allow(async_fn_in_trait)]
pub trait ICausalStore: Send + Sync {
    /// Causal nodes that affect each entity.
    async fn get_nodes_for_entities(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<CausalNode>>, StoreError>;

    /// Cause→effect links reachable from `node_ids` within `depth` hops.
    async fn traverse_from_node_ids(
        &self,
        node_ids: &[String],
        direction: TraversalDirection,
        depth: usize,
    ) -> Result<Vec<CausalLink>, StoreError>;
}

/// Concept→entity cross-link lookup, for semantic indexes that cannot
/// return linked entities inline.
#[allow(async_fn_in_trait)]
pub trait ICrossLinkStore: Send + Sync {
    async fn get_linked_entities_batch(
        &self,
        concept_ids: &[String],
    ) -> Result<HashMap<String, Vec<EntityLink>>, StoreError>;
}

impl<T: IEntityStore + ?Sized> IEntityStore for Arc<T> {
    async fn get_relationships_batch(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<Relationship>>, StoreError> {
        (**self).get_relationships_batch(ids).await
    }
}

impl<T: ITemporalStore + ?Sized> ITemporalStore for Arc<T> {
    async fn query_timeline_for_entities(
        &self,
        ids: &[String],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, Vec<EventRecord>>, StoreError> {
        (**self).query_timeline_for_entities(ids, from, to).await
    }
}

impl<T: ICausalStore + ?Sized> ICausalStore for Arc<T> {
    async fn get_nodes_for_entities(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, Vec<CausalNode>>, StoreError> {
        (**self).get_nodes_for_entities(ids).await
    }

    async fn traverse_from_node_ids(
        &self,
        node_ids: &[String],
        direction: TraversalDirection,
        depth: usize,
    ) -> Result<Vec<CausalLink>, StoreError> {
        (**self).traverse_from_node_ids(node_ids, direction, depth).await
    }
}

impl<T: ICrossLinkStore + ?Sized> ICrossLinkStore for Arc<T> {
    async fn get_linked_entities_batch(
        &self,
        concept_ids: &[String],
    ) -> Result<HashMap<String, Vec<EntityLink>>, StoreError> {
        (**self).get_linked_entities_batch(concept_ids).await
    }
}
