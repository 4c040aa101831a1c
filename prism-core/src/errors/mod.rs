//! Error taxonomy for the retrieval core.
//!
//! [`ValidationError`] and [`ExecutorError`] are fatal to the call that raised
//! them. [`StoreError`] is produced by collaborators and absorbed by the graph
//! expanders, which degrade to empty views instead of propagating it.

mod config_error;
mod executor_error;
mod prism_error;
mod store_error;
mod validation_error;

pub use config_error::ConfigError;
pub use executor_error::ExecutorError;
pub use prism_error::{PrismError, PrismResult, Stage};
pub use store_error::StoreError;
pub use validation_error::ValidationError;
