//! Domain model types

pub mod identity;
pub mod schedule;
pub mod slot;

pub use identity::Identity;
pub use schedule::ScheduleView;
pub use slot::{BookingTable, Day, Slot, SlotStatus};
