use tracing::{debug, info};
use wdl_store::StateStore;
use wdl_types::WarehouseRecord;

use crate::decode::decode_shipments;
use crate::error::{IngestError, IngestResult};
use crate::transform::{reconcile_last, serialize_record};

/// Ingest a ledger payload and commit the reconciled record under `key`.
///
/// Decodes the payload, reconciles it down to a single warehouse record,
/// serializes the record, and writes it through the store. The write is
/// all-or-nothing: a decode failure, an empty reconciliation, or a store
/// failure leaves the key untouched. On success the committed record is
/// returned for reporting.
pub fn ingest(
    store: &dyn StateStore,
    key: &str,
    payload: &[u8],
) -> IngestResult<WarehouseRecord> {
    let shipments = decode_shipments(payload)?;
    debug!(key, shipments = shipments.len(), "ingestion started");

    let record = reconcile_last(&shipments).ok_or_else(|| IngestError::EmptyResult {
        key: key.to_owned(),
    })?;

    let bytes = serialize_record(&record)?;
    store.put(key, &bytes)?;
    info!(key, vendor = %record.vendor, item = %record.name, "warehouse record committed");
    Ok(record)
}
