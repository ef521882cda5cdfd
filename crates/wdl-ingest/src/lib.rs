//! Ledger decoding and warehouse reconciliation for the Warehouse Dock
//! Ledger.
//!
//! This crate is the core of the system: it turns a serialized ledger
//! payload (an array of vendor shipments, each with item and defect
//! sequences) into a flattened [`WarehouseRecord`] and commits the result as
//! a single key/value pair through a [`StateStore`].
//!
//! # Pipeline
//!
//! decode ([`decode_shipments`]) → reconcile ([`reconcile_last`]) →
//! serialize → `StateStore::put`, composed by [`ingest`]. Each call is one
//! synchronous unit of work; either exactly one serialized record is written
//! under the caller's key or nothing is.
//!
//! # Reconciliation semantics
//!
//! The transformer walks the full cross-product shipments × items × defects
//! but keeps a single working slot, so only the record built from the last
//! shipment's last item and last defect survives. See [`reconcile_last`] for
//! the exact contract. An ingestion that produces no record is an error
//! ([`IngestError::EmptyResult`]), not a silent no-op.
//!
//! [`WarehouseRecord`]: wdl_types::WarehouseRecord
//! [`StateStore`]: wdl_store::StateStore

pub mod decode;
pub mod error;
pub mod pipeline;
pub mod transform;

pub use decode::decode_shipments;
pub use error::{IngestError, IngestResult};
pub use pipeline::ingest;
pub use transform::{reconcile_last, serialize_record};
