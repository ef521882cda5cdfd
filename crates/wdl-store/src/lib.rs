//! Key-value state store backends for the Warehouse Dock Ledger.
//!
//! The ledger core never touches storage directly; everything goes through
//! the [`StateStore`] trait, which is a flat key → opaque byte-value mapping
//! with create-or-overwrite semantics. Durability, consistency, and locking
//! discipline belong to the backend, not to the callers.
//!
//! # Backends
//!
//! - [`InMemoryStateStore`] — `HashMap`-based store for tests and embedding
//! - [`FileStateStore`] — append-only put log with CRC framing, recovered
//!   into an in-memory index on open
//!
//! # Design Rules
//!
//! 1. Last writer wins per key; no read-modify-write atomicity beyond it.
//! 2. The store never interprets values — they are opaque bytes.
//! 3. A missing key is `Ok(None)`, not an error; callers decide whether
//!    absence is a failure.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
