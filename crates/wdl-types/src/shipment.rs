use std::fmt;

use serde::{Deserialize, Serialize};

/// A named quantity entry inside a shipment.
///
/// The same shape is used for delivered items and for recorded defects.
/// Quantities are expected to be non-negative but are not validated here;
/// the decoder only enforces structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as written on the manifest.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "Desc", default)]
    pub desc: String,
    /// Counted quantity.
    #[serde(rename = "Qty", default)]
    pub qty: i64,
}

impl LineItem {
    /// Create a line item with an empty description.
    pub fn new(name: impl Into<String>, qty: i64) -> Self {
        Self {
            name: name.into(),
            desc: String::new(),
            qty,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.name, self.qty)
    }
}

/// One vendor delivery event.
///
/// A shipment carries vendor/vehicle metadata together with two independent
/// sequences: the items delivered and the defects recorded at the dock. The
/// sequences may differ in length and carry no identity linkage between a
/// specific item and a specific defect; reconciliation is purely positional
/// co-iteration downstream.
///
/// Every field is optional on the wire: missing fields decode to the empty
/// string, zero, or an empty sequence. The timestamp is a free-form string
/// and is never parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
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
    #[serde(rename = "Items", default)]
    pub items: Vec<LineItem>,
    #[serde(rename = "Defects", default)]
    pub defects: Vec<LineItem>,
}

impl ShipmentRecord {
    /// A shipment only contributes to reconciliation when it has at least
    /// one item and at least one defect entry.
    pub fn is_reconcilable(&self) -> bool {
        !self.items.is_empty() && !self.defects.is_empty()
    }
}
