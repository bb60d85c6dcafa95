//! Ledger of multi-day weather events.
//!
//! The ledger is the only owner of the persisted event collection. Strange
//! weather that lasts more than one calendar day is added when rolled, and
//! each decay pass reports the active events and then counts them down by a
//! day, dropping any that run out.
//!
//! Persistence is best effort: storage failures are retried a bounded
//! number of times, logged, and then swallowed. A failed read behaves as an
//! empty ledger; a failed write only loses durability.

pub mod duration;
pub mod event;
pub mod store;

pub use duration::{EventDuration, duration_days};
pub use event::{DecayStamp, OngoingEvent};
pub use store::{JsonFileStore, LedgerStore, MemoryStore};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::LedgerResult;

/// Default number of attempts for each storage call.
pub const DEFAULT_STORE_ATTEMPTS: u32 = 2;

/// Persisted collection of ongoing weather events.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    attempts: u32,
}

impl<S: LedgerStore> Ledger<S> {
    /// Create a ledger over a storage backend.
    pub fn new(store: S) -> Self {
        Self {
            store,
            attempts: DEFAULT_STORE_ATTEMPTS,
        }
    }

    /// Set how many times each storage call is attempted (at least once).
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// The storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current persisted events, without decaying them.
    pub fn events(&self) -> Vec<OngoingEvent> {
        self.load()
    }

    /// Register a strange-weather condition rolled `today`.
    ///
    /// Durations covering one day or less resolve within the day and are not
    /// stored. Otherwise the event is stored with `days - 1` days remaining,
    /// since today counts as the first day, and is reported by the next
    /// decay pass. Returns the event as added.
    ///
    /// If today's stamped decay pass has already run, the event joins that
    /// day's snapshot and is stored already decayed, so it is still shown
    /// and counted down exactly once for today.
    pub fn add_event(
        &mut self,
        condition: &str,
        duration_label: &str,
        today: NaiveDate,
    ) -> Option<OngoingEvent> {
        let days = duration_days(duration_label);
        if days <= 1 {
            debug!(condition, duration_label, days, "event resolves today, not tracked");
            return None;
        }

        let event = OngoingEvent {
            condition: condition.to_string(),
            original_duration: duration_label.to_string(),
            days_remaining: days - 1,
            start_date: today,
        };
        let mut events = self.load();
        match self.load_stamp().filter(|stamp| stamp.date == today) {
            Some(mut stamp) => {
                events.extend(event.decayed());
                stamp.active.push(event.clone());
                retry(self.attempts, "save decay stamp", || {
                    self.store.save_stamp(&stamp)
                });
            }
            None => events.push(event.clone()),
        }
        self.persist(&events);
        info!(condition, days, "ongoing event added");
        Some(event)
    }

    /// Report active events and count every one of them down by a day.
    ///
    /// The returned snapshot shows remaining days as of today, before the
    /// decrement. This is not idempotent: calling it twice decays twice.
    pub fn fetch_active_and_decay(&mut self) -> Vec<OngoingEvent> {
        let active: Vec<OngoingEvent> = self
            .load()
            .into_iter()
            .filter(|e| e.days_remaining > 0)
            .collect();

        let remaining: Vec<OngoingEvent> = active.iter().filter_map(OngoingEvent::decayed).collect();
        self.persist(&remaining);
        debug!(
            active = active.len(),
            expired = active.len() - remaining.len(),
            "decay pass"
        );
        active
    }

    /// Date-stamped decay: at most one decay pass per calendar day.
    ///
    /// The first call on `today` decays the ledger and stamps the day with
    /// the reported snapshot; later calls on the same day return that
    /// snapshot untouched.
    pub fn fetch_active_for_day(&mut self, today: NaiveDate) -> Vec<OngoingEvent> {
        if let Some(stamp) = self.load_stamp().filter(|s| s.date == today) {
            debug!(%today, "decay already ran today, reusing snapshot");
            return stamp.active;
        }

        let active = self.fetch_active_and_decay();
        let stamp = DecayStamp {
            date: today,
            active: active.clone(),
        };
        retry(self.attempts, "save decay stamp", || {
            self.store.save_stamp(&stamp)
        });
        active
    }

    fn load_stamp(&self) -> Option<DecayStamp> {
        retry(self.attempts, "load decay stamp", || self.store.load_stamp()).flatten()
    }

    fn load(&self) -> Vec<OngoingEvent> {
        retry(self.attempts, "load ongoing events", || self.store.load()).unwrap_or_default()
    }

    fn persist(&mut self, events: &[OngoingEvent]) {
        retry(self.attempts, "save ongoing events", || self.store.save(events));
    }
}

fn retry<T>(attempts: u32, what: &str, mut op: impl FnMut() -> LedgerResult<T>) -> Option<T> {
    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Some(value),
            Err(e) if attempt < attempts => warn!(attempt, error = %e, "{what} failed, retrying"),
            Err(e) => warn!(attempt, error = %e, "{what} failed, giving up"),
        }
    }
    None
}
