//! Booking engine error types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the booking engine
///
/// Every variant is recoverable: the presentation layer translates them
/// into a user-facing message and a redirect/retry path. None are fatal
/// to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum BookingError {
    /// Date string could not be parsed as an ISO calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Booking attempted for a date strictly before today
    #[error("booking for the past is not allowed: {0}")]
    PastDate(NaiveDate),

    /// Resource or slot label outside the configured sets
    #[error("unknown slot key: {resource}/{label}")]
    InvalidSlotKey { resource: String, label: String },

    /// Book attempted on an occupied slot
    #[error("slot is already taken")]
    SlotTaken,

    /// Pay, cancel or receipt on an empty slot
    #[error("booking not found")]
    NotFound,

    /// Pay, cancel or receipt by someone other than the owner
    #[error("not the owner of this booking")]
    Forbidden,

    /// Pay on a slot that is already paid
    #[error("booking is already paid")]
    AlreadyPaid,

    /// Snapshot load/save failure. The engine degrades to in-memory
    /// operation; this is logged for the operator, never shown to an
    /// end user.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

/// Type alias for Result with BookingError
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BookingError::InvalidDate("not-a-date".into());
        assert_eq!(format!("{}", err), "invalid date: not-a-date");

        let err = BookingError::InvalidSlotKey {
            resource: "Court 9".into(),
            label: "09:00-10:00".into(),
        };
        assert_eq!(format!("{}", err), "unknown slot key: Court 9/09:00-10:00");

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let err = BookingError::PastDate(date);
        assert_eq!(
            format!("{}", err),
            "booking for the past is not allowed: 2020-01-01"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(&BookingError::SlotTaken).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "SlotTaken"}));

        let json = serde_json::to_value(&BookingError::InvalidDate("x".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "InvalidDate", "detail": "x"}));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let err = BookingError::InvalidSlotKey {
            resource: "A".into(),
            label: "09:00-10:00".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: BookingError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
