use crate::error::StoreResult;

/// Flat key-value state store.
///
/// All implementations must satisfy these invariants:
/// - `put` is create-or-overwrite; the last writer wins per key.
/// - Values are opaque byte sequences, never interpreted by the store.
/// - A missing key reads as `Ok(None)`; only genuine backend failures
///   produce `Err`.
/// - Implementations own their locking; concurrent calls from multiple
///   threads must be safe.
pub trait StateStore: Send + Sync {
    /// Write `value` under `key`, creating or overwriting the entry.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Check whether a key has a stored value.
    ///
    /// Default implementation reads the value and discards it. Backends may
    /// override to avoid the copy.
    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
