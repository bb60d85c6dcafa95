//! The report pipeline shared by the scheduler and the chat command handler.
//!
//! Both adapters call into one [`WeatherService`]: roll the weather, decay
//! the ledger for the day, render the report. The ledger is the only state
//! shared between invocations; callers must run them one at a time.

use chrono::{NaiveDate, NaiveTime};
use ncw_mechanics::{DiceRoller, RngRoller};
use tracing::info;

use crate::command::{Command, Help};
use crate::config::WeatherConfig;
use crate::generator::WeatherGenerator;
use crate::ledger::{JsonFileStore, Ledger, LedgerStore, OngoingEvent};
use crate::report::{RenderOptions, Report, render};

/// Greeting posted with the scheduled daily report.
pub const DAILY_GREETING: &str =
    "🌅 **Good morning, Night City!** Here's your daily weather report:";

/// A response to a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A freshly rolled weather report.
    Report(Box<Report>),
    /// The command list.
    Help(Help),
}

/// Weather pipeline over a ledger store and a dice source.
#[derive(Debug)]
pub struct WeatherService<S, R> {
    ledger: Ledger<S>,
    generator: WeatherGenerator<R>,
    options: RenderOptions,
    post_time: NaiveTime,
    decay_once_per_day: bool,
}

impl WeatherService<JsonFileStore, RngRoller> {
    /// Build the production pipeline: JSON file ledger and an RNG roller
    /// seeded from the configuration (or the OS when no seed is set).
    pub fn from_config(config: &WeatherConfig) -> Self {
        let store = JsonFileStore::new(&config.ledger_path);
        let roller = match config.seed {
            Some(seed) => RngRoller::seeded(seed),
            None => RngRoller::from_entropy(),
        };
        Self::new(store, roller)
            .with_options(config.render_options())
            .with_post_time(config.post_time)
            .with_decay_once_per_day(config.decay_once_per_day)
            .with_store_attempts(config.store_attempts)
    }
}

impl<S: LedgerStore, R: DiceRoller> WeatherService<S, R> {
    /// Create a pipeline with default presentation settings.
    pub fn new(store: S, roller: R) -> Self {
        let defaults = WeatherConfig::default();
        Self {
            ledger: Ledger::new(store),
            generator: WeatherGenerator::new(roller),
            options: RenderOptions::default(),
            post_time: defaults.post_time,
            decay_once_per_day: defaults.decay_once_per_day,
        }
    }

    /// Set presentation settings.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the daily post time mentioned in the help text.
    pub fn with_post_time(mut self, post_time: NaiveTime) -> Self {
        self.post_time = post_time;
        self
    }

    /// Choose between date-stamped decay and decay on every report.
    pub fn with_decay_once_per_day(mut self, once: bool) -> Self {
        self.decay_once_per_day = once;
        self
    }

    /// Set the attempts per ledger storage call.
    pub fn with_store_attempts(mut self, attempts: u32) -> Self {
        self.ledger = self.ledger.with_attempts(attempts);
        self
    }

    /// The event ledger.
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Scheduled entry point: the daily report for `today`.
    pub fn run_daily_report(&mut self, today: NaiveDate) -> Report {
        let report = self.roll_report(today);
        info!(
            condition = %report.condition,
            severity = %report.severity,
            "daily report ready"
        );
        report
    }

    /// Roll new weather, decay the ledger for `today`, and render both.
    ///
    /// The roll comes first, so a multi-day event rolled today is already
    /// listed as continuing and counted down in today's report.
    pub fn roll_report(&mut self, today: NaiveDate) -> Report {
        let outcome = self.generator.generate(&mut self.ledger, today);
        let active = self.active_events(today);
        render(&outcome, &active, &self.options, today)
    }

    /// Respond to a chat message, or `None` if it is not a command.
    pub fn handle_message(&mut self, message: &str, today: NaiveDate) -> Option<Reply> {
        let command = Command::parse(message)?;
        info!(?command, "chat command");
        Some(match command {
            Command::Weather => Reply::Report(Box::new(self.roll_report(today))),
            Command::Help => Reply::Help(self.help()),
        })
    }

    /// Static help text.
    pub fn help(&self) -> Help {
        Help::new(self.post_time)
    }

    fn active_events(&mut self, today: NaiveDate) -> Vec<OngoingEvent> {
        if self.decay_once_per_day {
            self.ledger.fetch_active_for_day(today)
        } else {
            self.ledger.fetch_active_and_decay()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryStore;
    use crate::report::Severity;
    use ncw_mechanics::ScriptedRoller;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    /// Winter, temp d6=1 ("Cold 35°F"), strange, d10=3 Flooding for 3 days.
    fn flooding_then_clear() -> ScriptedRoller {
        ScriptedRoller::new(vec![1, 6, 3, 3, 1, 1, 1, 1])
    }

    #[test]
    fn flooding_continues_for_following_days() {
        let mut service = WeatherService::new(MemoryStore::new(), flooding_then_clear());

        let first = service.run_daily_report(day(10));
        assert_eq!(first.condition, "Flooding");
        assert_eq!(first.duration.as_deref(), Some("3 Days"));
        assert_eq!(first.continuing, vec!["Flooding - 2 days remaining"]);
        assert_eq!(service.ledger().events()[0].days_remaining, 1);

        let second = service.run_daily_report(day(11));
        assert_eq!(second.condition, "Clear");
        assert_eq!(second.continuing, vec!["Flooding - 1 day remaining"]);
        assert!(service.ledger().events().is_empty());

        let third = service.run_daily_report(day(12));
        assert!(third.continuing.is_empty());
    }

    #[test]
    fn repeated_triggers_on_one_day_decay_once() {
        let script = ScriptedRoller::new(vec![1, 6, 3, 3, 1, 1, 1, 1, 1, 1]);
        let mut service = WeatherService::new(MemoryStore::new(), script);
        service.run_daily_report(day(10));

        let a = service.run_daily_report(day(10));
        assert_eq!(a.condition, "Clear");
        assert_eq!(a.continuing, vec!["Flooding - 2 days remaining"]);
        assert_eq!(service.ledger().events()[0].days_remaining, 1);

        let b = service.run_daily_report(day(11));
        let c = service.run_daily_report(day(11));
        assert_eq!(b.continuing, vec!["Flooding - 1 day remaining"]);
        assert_eq!(b.continuing, c.continuing);
        assert!(service.ledger().events().is_empty());
    }

    #[test]
    fn event_rolled_on_second_trigger_is_reported_that_day() {
        let script = ScriptedRoller::new(vec![1, 1, 1, 6, 3, 3]);
        let mut service = WeatherService::new(MemoryStore::new(), script);

        assert!(service.run_daily_report(day(10)).continuing.is_empty());
        let second = service.run_daily_report(day(10));
        assert_eq!(second.condition, "Flooding");
        assert_eq!(second.continuing, vec!["Flooding - 2 days remaining"]);
        assert_eq!(service.ledger().events()[0].days_remaining, 1);

        let next_day = service.run_daily_report(day(11));
        assert_eq!(next_day.continuing, vec!["Flooding - 1 day remaining"]);
    }

    #[test]
    fn undated_decay_counts_every_report() {
        let mut service = WeatherService::new(MemoryStore::new(), flooding_then_clear())
            .with_decay_once_per_day(false);
        let first = service.run_daily_report(day(10));
        assert_eq!(first.continuing, vec!["Flooding - 2 days remaining"]);

        let a = service.run_daily_report(day(10));
        let b = service.run_daily_report(day(10));
        assert_eq!(a.continuing, vec!["Flooding - 1 day remaining"]);
        assert!(b.continuing.is_empty());
        assert!(service.ledger().events().is_empty());
    }

    #[test]
    fn chat_commands() {
        let mut service = WeatherService::new(MemoryStore::new(), ScriptedRoller::new(vec![4, 2]));

        match service.handle_message("!weather", day(10)) {
            Some(Reply::Report(report)) => {
                assert_eq!(report.condition, "Light Rain/Sleet");
                assert_eq!(report.severity, Severity::Standard);
            }
            other => panic!("expected a report, got {other:?}"),
        }
        assert!(matches!(
            service.handle_message("!weather help", day(10)),
            Some(Reply::Help(_))
        ));
        assert!(service.handle_message("hello", day(10)).is_none());
    }

    #[test]
    fn options_flow_into_report() {
        let options = RenderOptions {
            fictional_year: 2020,
            bulletin: None,
        };
        let mut service = WeatherService::new(MemoryStore::new(), ScriptedRoller::new(vec![1, 1]))
            .with_options(options);
        let report = service.roll_report(day(10));
        assert!(report.broadcast_date.ends_with("2020"));
        assert!(report.bulletin.is_none());
    }
}
