use tracing::debug;
use wdl_types::ShipmentRecord;

use crate::error::{IngestError, IngestResult};

/// Decode a serialized ledger payload into its shipment sequence.
///
/// The payload is a JSON array of shipment objects. An empty array decodes
/// to an empty sequence. Only structure is enforced: unknown fields are
/// ignored and missing fields take their defaults (empty string, zero,
/// empty sequence). A malformed payload fails the whole call with
/// [`IngestError::Decode`].
pub fn decode_shipments(payload: &[u8]) -> IngestResult<Vec<ShipmentRecord>> {
    let shipments: Vec<ShipmentRecord> =
        serde_json::from_slice(payload).map_err(IngestError::Decode)?;
    debug!(shipments = shipments.len(), "ledger payload decoded");
    Ok(shipments)
}
