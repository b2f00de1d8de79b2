//! Court booking engine
//!
//! The slot-booking state machine for a single venue: a per-day grid of
//! hour slots across a small fixed set of courts, with book / pay /
//! cancel transitions, ownership checks, and full-table snapshot
//! persistence after every committed mutation.
//!
//! The presentation layer in front of this crate supplies caller
//! identities and renders the returned views; nothing here
//! authenticates users or formats output.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod store;

// Re-exports
pub use config::{BookingConfig, ConfigError};
pub use engine::BookingEngine;
pub use store::{SnapshotStore, StoreError};

// Re-export shared types for convenient access
pub use shared::{
    BookingError, BookingResult, BookingTable, Day, Identity, ScheduleView, Slot, SlotStatus,
};
