//! Night City weather: seasonal tables, ongoing events, and broadcast reports.
//!
//! Weather is rolled from per-season d6 tables, escalating to a d10
//! strange-weather table. Strange weather that outlasts the day is tracked
//! in a persisted [`Ledger`] and reported as continuing on later days. The
//! [`WeatherService`] ties the pieces together for the scheduler and the
//! chat command handler.

/// Chat command recognition and help text.
pub mod command;
/// Environment-driven configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Weather rolls against the seasonal tables.
pub mod generator;
/// Persisted ongoing events and their daily decay.
pub mod ledger;
/// Report rendering, severity, and advisories.
pub mod report;
/// Daily post scheduling.
pub mod schedule;
/// Seasons of the year.
pub mod season;
/// The report pipeline.
pub mod service;
/// Static weather tables.
pub mod tables;

/// Re-export command types.
pub use command::{Command, Help};
/// Re-export configuration.
pub use config::WeatherConfig;
/// Re-export error types.
pub use error::{ConfigError, ConfigResult, LedgerError, LedgerResult};
/// Re-export generation types.
pub use generator::{WeatherGenerator, WeatherOutcome, roll_weather};
/// Re-export ledger types.
pub use ledger::{JsonFileStore, Ledger, LedgerStore, MemoryStore, OngoingEvent};
/// Re-export report types.
pub use report::{RenderOptions, Report, Severity};
/// Re-export scheduling.
pub use schedule::DailySchedule;
/// Re-export season.
pub use season::Season;
/// Re-export the pipeline.
pub use service::{DAILY_GREETING, Reply, WeatherService};
