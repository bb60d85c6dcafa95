//! Daily post scheduling.

use chrono::{DateTime, Days, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// Fires once a day at a fixed local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    /// Schedule posts at `at` every day.
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Time of day the schedule fires.
    pub fn time(&self) -> NaiveTime {
        self.at
    }

    /// Next firing at or after `now`.
    pub fn next_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if today >= now {
            today
        } else {
            now.date()
                .checked_add_days(Days::new(1))
                .map_or(today, |tomorrow| tomorrow.and_time(self.at))
        }
    }

    /// Real time to sleep from `now` until the next firing in `now`'s zone.
    ///
    /// The firing is resolved to an instant before subtracting, so a UTC
    /// offset change in between does not shift the post. A post time that
    /// falls in a skipped hour fires an hour later; an ambiguous one fires
    /// at its first occurrence.
    pub fn wait_until_next<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> std::time::Duration {
        let zone = now.timezone();
        let next = self.next_after(now.naive_local());
        let fire = zone.from_local_datetime(&next).earliest().or_else(|| {
            next.checked_add_signed(TimeDelta::hours(1))
                .and_then(|later| zone.from_local_datetime(&later).earliest())
        });
        fire.and_then(|fire| (fire - now.clone()).to_std().ok()).unwrap_or_default()
    }
}
