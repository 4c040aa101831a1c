//! # prism-fusion
//!
//! Fuses the semantic view and the three expansion views into one ranked
//! [`MergedSubgraph`](prism_core::MergedSubgraph).

mod accumulator;
pub mod filters;
pub mod merger;

pub use merger::Merger;
