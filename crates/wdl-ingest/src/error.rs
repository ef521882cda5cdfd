use wdl_store::StoreError;

/// Errors from the ingestion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The ledger payload could not be decoded. The whole ingestion is
    /// aborted; there is no partial recovery.
    #[error("malformed ledger payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The warehouse record could not be serialized for storage.
    #[error("failed to serialize warehouse record: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reconciliation produced no record, so there is nothing to write
    /// under the attempted key.
    #[error("reconciliation produced no record for key {key:?}")]
    EmptyResult { key: String },

    /// The state store rejected the write.
    #[error("state store failure: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
