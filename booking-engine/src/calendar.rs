//! Calendar helper - operational slot labels and date arithmetic
//!
//! Pure functions only; the engine owns all state.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use shared::{BookingError, BookingResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the ordered list of hour-range labels ("09:00-10:00", ...) from
/// the configured start hours. Each slot is exactly one hour long.
///
/// Hours outside 0..=22 are skipped; [`crate::config::BookingConfig::validate`]
/// rejects them before the engine ever gets here.
pub fn operational_slots(start_hours: &[u32]) -> Vec<String> {
    start_hours.iter().filter_map(|&h| slot_label(h)).collect()
}

/// Label for the one-hour slot starting at `start_hour`, or `None` when
/// the hour does not fit a same-day one-hour range.
pub fn slot_label(start_hour: u32) -> Option<String> {
    if start_hour > 22 {
        return None;
    }
    let start = NaiveTime::from_hms_opt(start_hour, 0, 0)?;
    let end = start + Duration::hours(1);
    Some(format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")))
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Strict ISO `%Y-%m-%d` parse
pub fn parse_date(s: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| BookingError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
