//! Schedule view returned to the presentation layer

use super::slot::Day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full grid for one date plus the navigation context a schedule page
/// needs to render it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub date: NaiveDate,
    /// Previous calendar date, for back navigation
    pub prev_date: NaiveDate,
    /// Next calendar date, for forward navigation
    pub next_date: NaiveDate,
    /// Whether `date` is today
    pub is_today: bool,
    /// Configured resource names in display order
    pub resources: Vec<String>,
    /// Operational slot labels, ascending by start time
    pub labels: Vec<String>,
    /// Fixed price per slot
    pub price_per_hour: i64,
    /// Resource x label grid; `None` means available
    pub grid: Day,
}
