use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::StateStore;

/// In-memory, HashMap-based state store.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStateStore")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core put/get
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get_roundtrip() {
        let store = InMemoryStateStore::new();
        store.put("k1", b"hello").unwrap();
        assert_eq!(store.get("k1").unwrap().as_deref(), Some(b"hello".as_ref()));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = InMemoryStateStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_overwrites_previous_value() {
        let store = InMemoryStateStore::new();
        store.put("k", b"first").unwrap();
        store.put("k", b"second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(b"second".as_ref()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_value_is_storable() {
        let store = InMemoryStateStore::new();
        store.put("k", b"").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(b"".as_ref()));
        assert!(store.exists("k").unwrap());
    }

    #[test]
    fn empty_key_rejected() {
        let store = InMemoryStateStore::new();
        assert!(matches!(store.put("", b"x"), Err(StoreError::EmptyKey)));
    }

    // -----------------------------------------------------------------------
    // Exists / utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn exists_reflects_puts() {
        let store = InMemoryStateStore::new();
        assert!(!store.exists("k").unwrap());
        store.put("k", b"v").unwrap();
        assert!(store.exists("k").unwrap());
    }

    #[test]
    fn len_is_empty_and_clear() {
        let store = InMemoryStateStore::new();
        assert!(store.is_empty());
        store.put("a", b"1").unwrap();
        store.put("b", b"2").unwrap();
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryStateStore::new();
        store.put("b", b"2").unwrap();
        store.put("a", b"1").unwrap();
        store.put("c", b"3").unwrap();
        assert_eq!(store.keys(), vec!["a", "b", "c"]);
    }

    // -----------------------------------------------------------------------
    // Concurrent access
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStateStore::new());
        store.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let value = store.get("shared").unwrap();
                    assert_eq!(value.as_deref(), Some(b"data".as_ref()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn concurrent_writers_last_wins() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStateStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.put("k", format!("w{i}").as_bytes()).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // Some writer won; the value is one of the four.
        let value = store.get("k").unwrap().unwrap();
        assert!(value.starts_with(b"w"));
    }

    #[test]
    fn debug_format() {
        let store = InMemoryStateStore::new();
        store.put("k", b"v").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStateStore"));
        assert!(debug.contains("entry_count"));
    }
}
