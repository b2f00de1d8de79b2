//! Slot model - the atomic reservable unit

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot lifecycle status
///
/// Only ever progresses Booked -> Paid. Cancellation removes the record
/// entirely instead of marking a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Booked,
    Paid,
}

/// One occupied slot record
///
/// Absence of a record encodes "available"; a fresh booking always
/// starts from absence and receives a newly generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Opaque booking id, generated at booking time
    pub id: String,
    /// Display name of the identity that created the booking
    pub user_name: String,
    /// Booked or Paid
    pub status: SlotStatus,
    /// Fixed hourly rate, captured at booking time
    pub price: i64,
    /// Payment method, set only on payment
    pub payment_method: Option<String>,
}

impl Slot {
    /// Whether `name` is the identity that created this booking
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.user_name == name
    }
}

/// Full resource x label grid for one date; `None` means available
pub type Day = BTreeMap<String, BTreeMap<String, Option<Slot>>>;

/// Complete durable state: ISO date -> resource -> label -> slot-or-absent
pub type BookingTable = BTreeMap<String, Day>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paid_slot() -> Slot {
        Slot {
            id: "6f1c1bd4-0000-0000-0000-000000000000".into(),
            user_name: "Budi Santoso".into(),
            status: SlotStatus::Paid,
            price: 15000,
            payment_method: Some("cash".into()),
        }
    }

    #[test]
    fn test_slot_wire_format() {
        let value = serde_json::to_value(paid_slot()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "6f1c1bd4-0000-0000-0000-000000000000",
                "user_name": "Budi Santoso",
                "status": "Paid",
                "price": 15000,
                "payment_method": "cash"
            })
        );
    }

    #[test]
    fn test_empty_slot_serializes_to_null() {
        let mut labels: BTreeMap<String, Option<Slot>> = BTreeMap::new();
        labels.insert("09:00-10:00".into(), None);
        labels.insert("10:00-11:00".into(), Some(paid_slot()));

        let mut day: Day = BTreeMap::new();
        day.insert("Court 1".into(), labels);

        let mut table: BookingTable = BTreeMap::new();
        table.insert("2030-01-01".into(), day);

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["2030-01-01"]["Court 1"]["09:00-10:00"], json!(null));
        assert_eq!(
            value["2030-01-01"]["Court 1"]["10:00-11:00"]["status"],
            json!("Paid")
        );
    }

    #[test]
    fn test_status_round_trip() {
        let json = serde_json::to_string(&SlotStatus::Booked).unwrap();
        assert_eq!(json, "\"Booked\"");
        let back: SlotStatus = serde_json::from_str("\"Paid\"").unwrap();
        assert_eq!(back, SlotStatus::Paid);
    }

    #[test]
    fn test_is_owned_by() {
        let slot = paid_slot();
        assert!(slot.is_owned_by("Budi Santoso"));
        assert!(!slot.is_owned_by("Siti Aisyah"));
    }
}
