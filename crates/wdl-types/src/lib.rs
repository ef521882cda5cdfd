//! Foundation types for the Warehouse Dock Ledger (WDL).
//!
//! This crate provides the data model shared by every other WDL crate: the
//! shipment documents that arrive on the wire and the flattened warehouse
//! record derived from them.
//!
//! # Key Types
//!
//! - [`ShipmentRecord`] — One vendor delivery event: metadata plus item and
//!   defect sequences
//! - [`LineItem`] — A named quantity entry, used for both delivered items
//!   and recorded defects
//! - [`WarehouseRecord`] — Flattened reconciliation of one item against one
//!   defect entry; the only shape ever persisted

pub mod shipment;
pub mod warehouse;

pub use shipment::{LineItem, ShipmentRecord};
pub use warehouse::WarehouseRecord;
