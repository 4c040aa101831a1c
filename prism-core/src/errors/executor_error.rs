/// Failures of the executor's semantic-search stage. Fatal to the retrieval.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutorError {
    #[error("semantic search timed out after {timeout_ms}ms")]
    SemanticSearchTimeout { timeout_ms: u64 },

    #[error("semantic search failed: {reason}")]
    SemanticSearchFailed { reason: String },
}
