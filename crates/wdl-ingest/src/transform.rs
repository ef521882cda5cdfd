use tracing::debug;
use wdl_types::{ShipmentRecord, WarehouseRecord};

use crate::error::{IngestError, IngestResult};

/// Reconcile a shipment sequence into at most one warehouse record.
///
/// Walks the full cross-product of shipments × items × defects, building a
/// record for every combination, but keeps a single working slot: each
/// combination overwrites the previous one, so the record built from the
/// last shipment's last item against its last defect (in sequence order) is
/// the one that survives. Shipments with zero items or zero defects have an
/// empty cross-product and contribute nothing.
///
/// Returns `None` when no combination exists at all, which callers treat as
/// a failed invocation rather than an empty success.
///
/// The persisted contract is exactly one flattened record per ingestion
/// key. Switching the slot to an accumulating collection changes the stored
/// payload shape and breaks existing readers.
pub fn reconcile_last(shipments: &[ShipmentRecord]) -> Option<WarehouseRecord> {
    let mut slot: Option<WarehouseRecord> = None;
    for shipment in shipments {
        for item in &shipment.items {
            for defect in &shipment.defects {
                slot = Some(WarehouseRecord::reconcile(shipment, item, defect));
            }
        }
    }
    if let Some(record) = &slot {
        debug!(vendor = %record.vendor, item = %record.name, "reconciliation produced a record");
    }
    slot
}

/// Serialize a warehouse record into the bytes persisted under the
/// ingestion key.
pub fn serialize_record(record: &WarehouseRecord) -> IngestResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(IngestError::Serialize)
}
