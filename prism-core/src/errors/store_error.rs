/// Graph-store collaborator errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{store} store unavailable: {reason}")]
    Unavailable { store: String, reason: String },

    #[error("{store} store query failed: {reason}")]
    QueryFailed { store: String, reason: String },

    #[error("{store} store timed out after {timeout_ms}ms")]
    Timeout { store: String, timeout_ms: u64 },
}

impl StoreError {
    /// Name of the store that produced this error.
    pub fn store(&self) -> &str {
        match self {
            Self::Unavailable { store, .. }
            | Self::QueryFailed { store, .. }
            | Self::Timeout { store, .. } => store,
        }
    }
}
