//! In-memory implementations of every collaborator trait.
//!
//! Each store records the id batches it was called with and can be told to
//! fail or stall through a [`Behavior`].

mod causal;
mod cross_link;
mod entity;
mod semantic;
mod temporal;

pub use causal::InMemoryCausalStore;
pub use cross_link::InMemoryCrossLinkStore;
pub use entity::InMemoryEntityStore;
pub use semantic::InMemorySemanticSearch;
pub use temporal::InMemoryTemporalStore;

use std::sync::Mutex;
use std::time::Duration;

use prism_core::StoreError;

/// How a store responds to calls.
#[derive(Debug, Clone, Default)]
pub enum Behavior {
    #[default]
    Healthy,
    /// Every call fails.
    Fail(String),
    /// Calls with index >= n (0-based) fail.
    FailFromCall(usize),
    /// Every call sleeps first.
    Delay(Duration),
}

impl Behavior {
    pub(crate) async fn apply(&self, store: &str, call_index: usize) -> Result<(), StoreError> {
        match self {
            Self::Healthy => Ok(()),
            Self::Fail(reason) => Err(StoreError::Unavailable {
                store: store.to_string(),
                reason: reason.clone(),
            }),
            Self::FailFromCall(n) if call_index >= *n => Err(StoreError::QueryFailed {
                store: store.to_string(),
                reason: format!("call {call_index} rejected"),
            }),
            Self::FailFromCall(_) => Ok(()),
            Self::Delay(d) => {
                tokio::time::sleep(*d).await;
                Ok(())
            }
        }
    }
}

/// Records argument batches; the batch count doubles as the call counter.
#[derive(Debug, Default)]
pub(crate) struct CallLog {
    batches: Mutex<Vec<Vec<String>>>,
}

impl CallLog {
    /// Record a call and return its 0-based index.
    pub(crate) fn record(&self, ids: &[String]) -> usize {
        let mut batches = self.batches.lock().unwrap_or_else(|e| e.into_inner());
        batches.push(ids.to_vec());
        batches.len() - 1
    }

    pub(crate) fn batches(&self) -> Vec<Vec<String>> {
        self.batches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
