//! Data model shared by every stage of the retrieval pipeline.
//!
//! All values here are immutable snapshots once produced: expanders build
//! views, the merger reads them and emits fresh [`MergedNode`]s.

pub mod degradation_event;
pub mod execution;
pub mod graph;
pub mod merged;
pub mod seeds;
pub mod semantic;
pub mod view;

pub use degradation_event::DegradationEvent;
pub use execution::{BranchReport, BranchStatus, ExecutionResult, ExpansionOutcome, PhaseTiming};
pub use graph::{CausalLink, CausalNode, CausalToken, EntityLink, Relationship, TraversalDirection};
pub use merged::{MergedNode, MergedSubgraph, ViewContributions};
pub use seeds::{SeedEntity, SeedExtractionResult, SeedStats};
pub use semantic::{ConceptRecord, EnrichedSemanticMatch, SemanticMatch};
pub use view::{EntityRecord, EventRecord, GraphView, NodeData, ScoredNode, ViewSource};
