pub mod chat;
pub mod daily;
pub mod events;
pub mod roll;
pub mod serve;

use chrono::{Local, NaiveDate};

/// The given date, or today's local date.
fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
