//! # prism-core
//!
//! Foundation crate for the Prism multi-view retrieval core.
//! Defines the graph-view data model, collaborator traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PrismConfig;
pub use errors::{PrismError, PrismResult, Stage, StoreError, ValidationError};
pub use intent::{DepthHints, Intent, IntentType};
pub use models::{GraphView, MergedNode, MergedSubgraph, NodeData, ScoredNode, ViewSource};
