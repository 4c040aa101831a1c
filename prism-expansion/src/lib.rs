//! # prism-expansion
//!
//! Three independent graph expanders. Each takes seed entity ids and a depth
//! hint and returns a scored [`GraphView`](prism_core::GraphView) built from
//! batched store lookups. Store failures never propagate: the expander logs
//! them and returns whatever it had gathered, flagged as degraded.

pub mod causal;
pub mod entity;
mod expander;
pub mod temporal;

pub use causal::CausalExpander;
pub use entity::EntityExpander;
pub use expander::{dedup_ids, IGraphExpander};
pub use temporal::TemporalExpander;
