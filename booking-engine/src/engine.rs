//! Booking engine - the slot state machine
//!
//! Per-slot lifecycle:
//!
//! ```text
//! Empty ──book──▶ Booked ──pay──▶ Paid
//!   ▲               │               │
//!   └──────cancel───┴──────cancel───┘
//! ```
//!
//! Every mutation runs under the table write lock around
//! "read state → decide → mutate → flush", so concurrent callers never
//! observe a half-applied transition and two books racing on the same
//! slot produce exactly one winner. The flush is best-effort: a
//! persistence failure is logged and swallowed, never allowed to abort
//! a transition that already succeeded in memory.

use crate::calendar;
use crate::config::{BookingConfig, ConfigError};
use crate::store::SnapshotStore;
use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::{
    BookingError, BookingResult, BookingTable, Day, Identity, ScheduleView, Slot, SlotStatus,
};
use uuid::Uuid;

pub struct BookingEngine {
    config: BookingConfig,
    /// Slot labels derived once from the configured start hours,
    /// ascending and deduplicated
    labels: Vec<String>,
    store: SnapshotStore,
    table: RwLock<BookingTable>,
}

impl BookingEngine {
    /// Validate the configuration, load the snapshot, and hand back a
    /// ready engine. The engine exclusively owns the table from here on.
    pub fn init(config: BookingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut start_hours = config.start_hours.clone();
        start_hours.sort_unstable();
        start_hours.dedup();
        let labels = calendar::operational_slots(&start_hours);

        let store = SnapshotStore::new(config.data_path.clone());
        let table = store.load();
        tracing::info!(
            path = %store.path().display(),
            days = table.len(),
            resources = config.resources.len(),
            slots_per_day = labels.len(),
            "Booking engine initialized"
        );

        Ok(Self {
            config,
            labels,
            store,
            table: RwLock::new(table),
        })
    }

    /// Final flush. The one place a persistence failure is surfaced
    /// instead of swallowed, so the operator sees it at shutdown.
    pub fn shutdown(&self) -> BookingResult<()> {
        let table = self.table.read();
        self.store.save(&table)?;
        tracing::info!(days = table.len(), "Booking table flushed on shutdown");
        Ok(())
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Idempotently materialize the empty grid for a date, every
    /// configured (resource, label) pair mapped to available.
    pub fn ensure_day(&self, date: &str) -> BookingResult<()> {
        let parsed = calendar::parse_date(date)?;
        let mut table = self.table.write();
        table
            .entry(calendar::format_date(parsed))
            .or_insert_with(|| self.empty_day());
        Ok(())
    }

    /// Book an available slot for `identity`.
    ///
    /// Dates strictly before today are rejected; occupied slots return
    /// [`BookingError::SlotTaken`] without mutating anything.
    pub fn book(
        &self,
        date: &str,
        resource: &str,
        label: &str,
        identity: &Identity,
    ) -> BookingResult<Slot> {
        self.check_slot_key(resource, label)?;
        let parsed = calendar::parse_date(date)?;
        if parsed < calendar::today() {
            return Err(BookingError::PastDate(parsed));
        }
        let key = calendar::format_date(parsed);

        let mut table = self.table.write();
        let cell = table
            .entry(key.clone())
            .or_insert_with(|| self.empty_day())
            .entry(resource.to_string())
            .or_default()
            .entry(label.to_string())
            .or_insert(None);

        if cell.is_some() {
            return Err(BookingError::SlotTaken);
        }

        let slot = Slot {
            id: Uuid::new_v4().to_string(),
            user_name: identity.as_str().to_string(),
            status: SlotStatus::Booked,
            price: self.config.price_per_hour,
            payment_method: None,
        };
        *cell = Some(slot.clone());
        self.flush(&table);

        tracing::info!(date = %key, resource, label, user = %identity, id = %slot.id, "Slot booked");
        Ok(slot)
    }

    /// Record payment for a booked slot. Only the owner may pay; paying
    /// twice returns [`BookingError::AlreadyPaid`] without touching the
    /// recorded method.
    pub fn pay(
        &self,
        date: &str,
        resource: &str,
        label: &str,
        identity: &Identity,
        method: &str,
    ) -> BookingResult<Slot> {
        self.check_slot_key(resource, label)?;
        let parsed = calendar::parse_date(date)?;
        let key = calendar::format_date(parsed);

        let mut table = self.table.write();
        let slot = Self::occupied_slot_mut(&mut table, &key, resource, label)?;
        if !slot.is_owned_by(identity.as_str()) {
            return Err(BookingError::Forbidden);
        }
        if slot.status == SlotStatus::Paid {
            return Err(BookingError::AlreadyPaid);
        }

        slot.status = SlotStatus::Paid;
        slot.payment_method = Some(method.to_string());
        let updated = slot.clone();
        self.flush(&table);

        tracing::info!(date = %key, resource, label, user = %identity, method, "Slot paid");
        Ok(updated)
    }

    /// Cancel a booking, paid or not. The record is removed entirely,
    /// returning the slot to available; the captured copy is handed back
    /// for the cancellation receipt.
    pub fn cancel(
        &self,
        date: &str,
        resource: &str,
        label: &str,
        identity: &Identity,
    ) -> BookingResult<Slot> {
        self.check_slot_key(resource, label)?;
        let parsed = calendar::parse_date(date)?;
        let key = calendar::format_date(parsed);

        let mut table = self.table.write();
        let cell = table
            .get_mut(&key)
            .and_then(|day| day.get_mut(resource))
            .and_then(|slots| slots.get_mut(label))
            .ok_or(BookingError::NotFound)?;

        let cancelled = match cell.take() {
            None => return Err(BookingError::NotFound),
            Some(slot) if !slot.is_owned_by(identity.as_str()) => {
                // Not ours: put it back untouched
                *cell = Some(slot);
                return Err(BookingError::Forbidden);
            }
            Some(slot) => slot,
        };
        self.flush(&table);

        tracing::info!(date = %key, resource, label, user = %identity, id = %cancelled.id, "Booking cancelled");
        Ok(cancelled)
    }

    /// Fetch the receipt copy of a paid slot. A receipt only exists once
    /// the slot is paid, and only for its owner.
    pub fn receipt(
        &self,
        date: &str,
        resource: &str,
        label: &str,
        identity: &Identity,
    ) -> BookingResult<Slot> {
        self.check_slot_key(resource, label)?;
        let parsed = calendar::parse_date(date)?;
        let key = calendar::format_date(parsed);

        let table = self.table.read();
        let slot = table
            .get(&key)
            .and_then(|day| day.get(resource))
            .and_then(|slots| slots.get(label))
            .and_then(|cell| cell.as_ref())
            .ok_or(BookingError::NotFound)?;

        if !slot.is_owned_by(identity.as_str()) {
            return Err(BookingError::Forbidden);
        }
        if slot.status != SlotStatus::Paid {
            return Err(BookingError::NotFound);
        }
        Ok(slot.clone())
    }

    /// Full grid for a date, plus prev/next dates and a today flag for
    /// the schedule page. Materializes the day if this is its first
    /// reference.
    pub fn get_schedule(&self, date: &str) -> BookingResult<ScheduleView> {
        let parsed = calendar::parse_date(date)?;
        let key = calendar::format_date(parsed);

        // Fast path: day already materialized, a read lock suffices
        {
            let table = self.table.read();
            if let Some(day) = table.get(&key) {
                return Ok(self.view(parsed, day.clone()));
            }
        }

        let mut table = self.table.write();
        let day = table.entry(key).or_insert_with(|| self.empty_day()).clone();
        Ok(self.view(parsed, day))
    }

    fn view(&self, date: NaiveDate, grid: Day) -> ScheduleView {
        ScheduleView {
            date,
            prev_date: calendar::add_days(date, -1),
            next_date: calendar::add_days(date, 1),
            is_today: date == calendar::today(),
            resources: self.config.resources.clone(),
            labels: self.labels.clone(),
            price_per_hour: self.config.price_per_hour,
            grid,
        }
    }

    fn empty_day(&self) -> Day {
        self.config
            .resources
            .iter()
            .map(|resource| {
                let slots = self.labels.iter().map(|l| (l.clone(), None)).collect();
                (resource.clone(), slots)
            })
            .collect()
    }

    /// Reject (resource, label) pairs outside the configured sets before
    /// they can grow the table.
    fn check_slot_key(&self, resource: &str, label: &str) -> BookingResult<()> {
        let known_resource = self.config.resources.iter().any(|r| r == resource);
        let known_label = self.labels.iter().any(|l| l == label);
        if known_resource && known_label {
            Ok(())
        } else {
            Err(BookingError::InvalidSlotKey {
                resource: resource.to_string(),
                label: label.to_string(),
            })
        }
    }

    fn occupied_slot_mut<'t>(
        table: &'t mut BookingTable,
        key: &str,
        resource: &str,
        label: &str,
    ) -> BookingResult<&'t mut Slot> {
        table
            .get_mut(key)
            .and_then(|day| day.get_mut(resource))
            .and_then(|slots| slots.get_mut(label))
            .and_then(|cell| cell.as_mut())
            .ok_or(BookingError::NotFound)
    }

    /// Best-effort flush after a committed mutation.
    fn flush(&self, table: &BookingTable) {
        if let Err(e) = self.store.save(table) {
            tracing::warn!(error = %e, "Snapshot flush failed, continuing in memory");
        }
    }
}
