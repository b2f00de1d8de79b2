//! Engine configuration
//!
//! Fixed at startup: court names, operational start hours (each derives
//! a one-hour slot label), the flat price per slot, and the snapshot
//! path. Nothing here changes at runtime.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors, all caught at engine init
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no resources configured")]
    NoResources,

    #[error("no operational start hours configured")]
    NoStartHours,

    #[error("start hour out of range (0..=22): {0}")]
    HourOutOfRange(u32),

    #[error("duplicate resource name: {0}")]
    DuplicateResource(String),
}

#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Snapshot file the whole booking table is persisted to
    pub data_path: PathBuf,
    /// Court names, in display order
    pub resources: Vec<String>,
    /// Start hours of the bookable one-hour slots
    pub start_hours: Vec<u32>,
    /// Flat price per slot, resource-independent
    pub price_per_hour: i64,
}

impl BookingConfig {
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("BOOKING_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/var/lib/booking/bookings.json")),
            resources: std::env::var("BOOKING_RESOURCES")
                .map(|v| split_csv(&v))
                .unwrap_or_else(|_| vec!["Court 1".into(), "Court 2".into()]),
            start_hours: std::env::var("BOOKING_START_HOURS")
                .map(|v| parse_hours(&v))
                .unwrap_or_else(|_| (9..18).collect()),
            price_per_hour: std::env::var("BOOKING_PRICE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15000),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resources.is_empty() {
            return Err(ConfigError::NoResources);
        }
        if self.start_hours.is_empty() {
            return Err(ConfigError::NoStartHours);
        }
        for &hour in &self.start_hours {
            if hour > 22 {
                return Err(ConfigError::HourOutOfRange(hour));
            }
        }
        for (i, name) in self.resources.iter().enumerate() {
            if self.resources[..i].contains(name) {
                return Err(ConfigError::DuplicateResource(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_hours(value: &str) -> Vec<u32> {
    value
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}
