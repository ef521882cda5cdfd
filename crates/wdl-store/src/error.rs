/// Errors from state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure inside the backend.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A log entry failed integrity validation during recovery.
    #[error("corrupt log entry at offset {offset}: {reason}")]
    CorruptEntry { offset: u64, reason: String },

    /// Keys must be non-empty.
    #[error("empty key")]
    EmptyKey,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
