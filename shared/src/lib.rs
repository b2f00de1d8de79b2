//! Shared types for the court booking engine
//!
//! Domain model types and the error enum consumed by the booking engine
//! and by any presentation layer sitting in front of it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{BookingError, BookingResult};
pub use models::{BookingTable, Day, Identity, ScheduleView, Slot, SlotStatus};
