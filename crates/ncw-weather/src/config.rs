//! Configuration for the weather reporter.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable              | Meaning                              | Default               |
//! |-----------------------|--------------------------------------|-----------------------|
//! | `NCWR_LEDGER_PATH`    | ongoing events file                  | `ongoing_events.json` |
//! | `NCWR_POST_TIME`      | daily post time, `HH:MM`             | `08:00`               |
//! | `NCWR_WEBHOOK_URL`    | delivery destination                 | unset (console)       |
//! | `NCWR_SEED`           | RNG seed for reproducible rolls      | unset (OS entropy)    |
//! | `NCWR_YEAR`           | in-setting year on broadcasts        | `2047`                |
//! | `NCWR_STORE_ATTEMPTS` | attempts per ledger read/write       | `2`                   |

use std::path::PathBuf;

use chrono::NaiveTime;

use crate::error::{ConfigError, ConfigResult};
use crate::ledger::DEFAULT_STORE_ATTEMPTS;
use crate::report::{DEFAULT_FICTIONAL_YEAR, RenderOptions};

/// Reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Where ongoing events are persisted.
    pub ledger_path: PathBuf,
    /// Local time of the daily post.
    pub post_time: NaiveTime,
    /// Webhook to deliver reports to; console output when unset.
    pub webhook_url: Option<String>,
    /// RNG seed; OS entropy when unset.
    pub seed: Option<u64>,
    /// Year shown on broadcasts.
    pub fictional_year: i32,
    /// Attempts per ledger storage call.
    pub store_attempts: u32,
    /// Only decay ongoing events once per calendar day.
    pub decay_once_per_day: bool,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("ongoing_events.json"),
            post_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            webhook_url: None,
            seed: None,
            fictional_year: DEFAULT_FICTIONAL_YEAR,
            store_attempts: DEFAULT_STORE_ATTEMPTS,
            decay_once_per_day: true,
        }
    }
}

impl WeatherConfig {
    /// Load from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names; unset or empty
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("NCWR_LEDGER_PATH") {
            config.ledger_path = PathBuf::from(path);
        }
        if let Some(time) = get("NCWR_POST_TIME") {
            config.post_time = parse_post_time(&time)?;
        }
        config.webhook_url = get("NCWR_WEBHOOK_URL");
        if let Some(seed) = get("NCWR_SEED") {
            config.seed = Some(parse_number("NCWR_SEED", &seed)?);
        }
        if let Some(year) = get("NCWR_YEAR") {
            config.fictional_year = parse_number("NCWR_YEAR", &year)?;
        }
        if let Some(attempts) = get("NCWR_STORE_ATTEMPTS") {
            config.store_attempts = parse_number::<u32>("NCWR_STORE_ATTEMPTS", &attempts)?.max(1);
        }
        Ok(config)
    }

    /// Set the ledger file.
    pub fn with_ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the daily post time.
    pub fn with_post_time(mut self, time: NaiveTime) -> Self {
        self.post_time = time;
        self
    }

    /// Set the delivery webhook.
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Choose between date-stamped decay and decay on every report.
    pub fn with_decay_once_per_day(mut self, once: bool) -> Self {
        self.decay_once_per_day = once;
        self
    }

    /// Presentation settings derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fictional_year: self.fictional_year,
            ..RenderOptions::default()
        }
    }
}

/// Parse an `HH:MM` (or `HH:MM:SS`) time of day.
pub fn parse_post_time(s: &str) -> ConfigResult<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ConfigError::InvalidPostTime(s.to_string()))
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = WeatherConfig::default();
        assert_eq!(cfg.ledger_path, PathBuf::from("ongoing_events.json"));
        assert_eq!(cfg.post_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(cfg.fictional_year, 2047);
        assert_eq!(cfg.store_attempts, 2);
        assert!(cfg.seed.is_none());
        assert!(cfg.webhook_url.is_none());
        assert!(cfg.decay_once_per_day);
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let cfg = WeatherConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, WeatherConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let cfg = WeatherConfig::from_lookup(lookup_from(&[
            ("NCWR_LEDGER_PATH", "/var/lib/ncwr/events.json"),
            ("NCWR_POST_TIME", "07:45"),
            ("NCWR_WEBHOOK_URL", "https://example.invalid/hook"),
            ("NCWR_SEED", "1234"),
            ("NCWR_YEAR", "2045"),
            ("NCWR_STORE_ATTEMPTS", "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.ledger_path, PathBuf::from("/var/lib/ncwr/events.json"));
        assert_eq!(cfg.post_time, NaiveTime::from_hms_opt(7, 45, 0).unwrap());
        assert_eq!(cfg.webhook_url.as_deref(), Some("https://example.invalid/hook"));
        assert_eq!(cfg.seed, Some(1234));
        assert_eq!(cfg.fictional_year, 2045);
        assert_eq!(cfg.store_attempts, 1);
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = WeatherConfig::from_lookup(lookup_from(&[("NCWR_WEBHOOK_URL", "  ")])).unwrap();
        assert!(cfg.webhook_url.is_none());
    }

    #[test]
    fn bad_values_are_errors() {
        let err = WeatherConfig::from_lookup(lookup_from(&[("NCWR_POST_TIME", "8am")]));
        assert!(matches!(err, Err(ConfigError::InvalidPostTime(_))));

        let err = WeatherConfig::from_lookup(lookup_from(&[("NCWR_SEED", "-1")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidNumber {
                key: "NCWR_SEED",
                ..
            })
        ));
    }

    #[test]
    fn builder_methods() {
        let cfg = WeatherConfig::default()
            .with_seed(7)
            .with_ledger_path("events.json")
            .with_decay_once_per_day(false);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.ledger_path, PathBuf::from("events.json"));
        assert!(!cfg.decay_once_per_day);
        assert_eq!(cfg.render_options().fictional_year, 2047);
    }

    #[test]
    fn post_time_with_seconds() {
        assert_eq!(
            parse_post_time("08:00:30").unwrap(),
            NaiveTime::from_hms_opt(8, 0, 30).unwrap()
        );
    }
}
