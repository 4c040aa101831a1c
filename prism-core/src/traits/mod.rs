//! Collaborator contracts. Implementations live outside the core: they own
//! connections to the semantic index and the three graph stores.

mod graph_stores;
mod semantic_search;

pub use graph_stores::{ICausalStore, ICrossLinkStore, IEntityStore, ITemporalStore};
pub use semantic_search::ISemanticSearch;
