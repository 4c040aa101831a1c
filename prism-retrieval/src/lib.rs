//! # prism-retrieval
//!
//! The cascading retrieval executor:
//! query → semantic search → entity seeds → {entity, temporal, causal}
//! expansion in parallel → multi-view merge.

pub mod engine;
pub mod seeds;

pub use engine::RetrievalEngine;
pub use seeds::{extract_seeds, extract_seeds_batched, CrossLinkSeedExtractor};
