//! Named-operation dispatch surface for the Warehouse Dock Ledger.
//!
//! Callers address the ledger by operation name plus a flat argument list.
//! Names are parsed once into the closed [`Operation`] enum and routed with
//! an exhaustive match; an unrecognized name is a structured
//! [`DispatchError::UnknownOperation`], never a fallthrough. Argument counts
//! are validated before any handler touches the store.
//!
//! The store is an explicit capability: every call takes `&dyn StateStore`,
//! so tests and embedders substitute an in-memory store freely.

pub mod error;
pub mod operation;

pub use error::{DispatchError, DispatchResult};
pub use operation::{dispatch, DispatchOutcome, Operation, INIT_KEY};
