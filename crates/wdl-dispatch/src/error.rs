use wdl_ingest::IngestError;
use wdl_store::StoreError;

/// Errors surfaced by the dispatch layer.
///
/// Every variant names the operation or key involved, enough to diagnose a
/// failed call without exposing store internals.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The operation name matched no known operation.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    /// The call carried the wrong number of arguments.
    #[error("operation {operation:?} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A read targeted a key that holds no value.
    #[error("no value stored under key {key:?}")]
    NotFound { key: String },

    /// The state store failed while handling the named key.
    #[error("state store failed for key {key:?}")]
    StoreFailure {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The ingestion pipeline failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
