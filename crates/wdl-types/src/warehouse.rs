use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shipment::{LineItem, ShipmentRecord};

/// Flattened reconciliation of one item against one defect entry.
///
/// A warehouse record copies the owning shipment's metadata, the item's name
/// and description, and nets the defect quantity off the item quantity. It is
/// a derived, ephemeral value: it never lives under its own key and exists
/// only as the serialized payload written under a caller-supplied key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRecord {
    #[serde(rename = "Vendor", default)]
    pub vendor: String,
    #[serde(rename = "Time", default)]
    pub time: String,
    #[serde(rename = "Geolocation", default)]
    pub geolocation: String,
    #[serde(rename = "Vehicleno", default)]
    pub vehicle_no: String,
    #[serde(rename = "Vehicletype", default)]
    pub vehicle_type: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Desc", default)]
    pub desc: String,
    /// Item quantity net of the defect quantity.
    #[serde(rename = "ScannedItem", default)]
    pub scanned_item: i64,
    /// Defect quantity as recorded at the dock.
    #[serde(rename = "Defect", default)]
    pub defect: i64,
}

impl WarehouseRecord {
    /// Combine one shipment's metadata with one item and one defect entry.
    ///
    /// `scanned_item` is the item quantity minus the defect quantity. The
    /// subtraction is taken at face value; a defect count exceeding the item
    /// count yields a negative net, mirroring the source manifests.
    pub fn reconcile(shipment: &ShipmentRecord, item: &LineItem, defect: &LineItem) -> Self {
        Self {
            vendor: shipment.vendor.clone(),
            time: shipment.time.clone(),
            geolocation: shipment.geolocation.clone(),
            vehicle_no: shipment.vehicle_no.clone(),
            vehicle_type: shipment.vehicle_type.clone(),
            name: item.name.clone(),
            desc: item.desc.clone(),
            scanned_item: item.qty - defect.qty,
            defect: defect.qty,
        }
    }
}

impl fmt::Display for WarehouseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (scanned {}, defect {})",
            self.vendor, self.name, self.scanned_item, self.defect
        )
    }
}
