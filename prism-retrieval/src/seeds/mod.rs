//! Seed extraction: turn semantic matches into deduplicated entity seeds.
//!
//! Matches are walked in the order given (callers pass them best-first), so
//! the first qualifying match to link an entity owns its seed.

mod batched;
mod builder;
mod extractor;

pub use batched::{extract_seeds_batched, CrossLinkSeedExtractor};
pub use extractor::extract_seeds;
