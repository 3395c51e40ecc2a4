use serde::{Deserialize, Serialize};

use stockroom_core::{WarehouseId, WarehousemanId};

use crate::product::Localisation;
use crate::reconcile::NewSlot;

/// A warehouseman record as served by the remote API (camelCase JSON).
///
/// Doubles as the warehouse lookup: a slot created on first restock is keyed
/// by the acting warehouseman's `warehouse_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouseman {
    pub id: WarehousemanId,
    pub name: String,
    pub dob: String,
    pub city: String,
    pub secret_key: String,
    pub warehouse_id: WarehouseId,
}

impl Warehouseman {
    /// Slot template for a restock that has to create its slot.
    ///
    /// The record carries no coordinates, so a freshly created slot starts
    /// at (0, 0) until the backend enriches it.
    pub fn new_slot(&self) -> NewSlot {
        NewSlot {
            id: self.warehouse_id.into(),
            name: self.city.clone(),
            localisation: Localisation {
                city: self.city.clone(),
                latitude: 0.0,
                longitude: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::StockId;

    #[test]
    fn warehouseman_round_trips_camel_case_json() {
        let raw = serde_json::json!({
            "id": 1333,
            "name": "Hanane",
            "dob": "1999-09-09",
            "city": "Marrakech",
            "secretKey": "AH90907J",
            "warehouseId": 1999
        });
        let w: Warehouseman = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(w.secret_key, "AH90907J");
        assert_eq!(serde_json::to_value(&w).unwrap(), raw);
    }

    #[test]
    fn new_slot_is_keyed_by_warehouse_id() {
        let w = Warehouseman {
            id: WarehousemanId::new(1333),
            name: "Hanane".to_string(),
            dob: "1999-09-09".to_string(),
            city: "Marrakech".to_string(),
            secret_key: "AH90907J".to_string(),
            warehouse_id: WarehouseId::new(1999),
        };
        let slot = w.new_slot();
        assert_eq!(slot.id, StockId::new(1999));
        assert_eq!(slot.localisation.city, "Marrakech");
    }
}
