//! Weather generation.
//!
//! One roll produces a temperature and a condition from the season's d6
//! tables. A "Strange" condition escalates to the d10 strange-weather table,
//! whose entry gets a d6-instantiated duration; multi-day results are handed
//! to the ledger.

use chrono::NaiveDate;
use ncw_mechanics::{DiceRoller, Die};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::{Ledger, LedgerStore};
use crate::season::Season;
use crate::tables::{COLD_SNAP_HEAT_WAVE, STRANGE, season_table, strange_table};

/// The result of one weather roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherOutcome {
    /// Temperature band.
    pub temperature: String,
    /// Concrete condition; never the "Strange" sentinel.
    pub condition: String,
    /// Instantiated duration, present only for strange weather.
    pub duration: Option<String>,
    /// Season the roll was made in.
    pub season: Season,
}

impl WeatherOutcome {
    /// Whether this outcome came from the strange-weather table.
    pub fn is_strange(&self) -> bool {
        self.duration.is_some()
    }
}

/// Resolve the temperature-dependent "Cold Snap/Heat Wave" entry.
///
/// Cool or cold bands give "Cold Snap"; anything else gives "Heat Wave".
pub fn resolve_cold_snap(temperature: &str) -> &'static str {
    if temperature.contains("Cool") || temperature.contains("Cold") {
        "Cold Snap"
    } else {
        "Heat Wave"
    }
}

/// Roll weather for a season without touching any ledger.
///
/// Dice are consumed in a fixed order: d6 temperature, d6 condition, then
/// for strange weather a d10 entry and a d6 duration.
pub fn roll_weather(season: Season, roller: &mut impl DiceRoller) -> WeatherOutcome {
    let table = season_table(season);
    let temperature_roll = roller.roll(Die::D6);
    let condition_roll = roller.roll(Die::D6);
    debug!(%season, %temperature_roll, %condition_roll, "weather rolled");
    let temperature = table.temperature[temperature_roll.index()];
    let condition = table.conditions[condition_roll.index()];

    if condition != STRANGE {
        return WeatherOutcome {
            temperature: temperature.to_string(),
            condition: condition.to_string(),
            duration: None,
            season,
        };
    }

    let entry = &strange_table()[roller.roll(Die::D10).index()];
    let duration = entry.instantiate_duration(roller.roll(Die::D6).value);
    let condition = if entry.condition == COLD_SNAP_HEAT_WAVE {
        resolve_cold_snap(temperature)
    } else {
        entry.condition
    };
    debug!(condition, %duration, "strange weather");

    WeatherOutcome {
        temperature: temperature.to_string(),
        condition: condition.to_string(),
        duration: Some(duration),
        season,
    }
}

/// Rolls weather and registers multi-day events.
#[derive(Debug)]
pub struct WeatherGenerator<R> {
    roller: R,
}

impl<R: DiceRoller> WeatherGenerator<R> {
    /// Create a generator that draws from `roller`.
    pub fn new(roller: R) -> Self {
        Self { roller }
    }

    /// The dice source.
    pub fn roller(&self) -> &R {
        &self.roller
    }

    /// Roll today's weather and offer strange weather to the ledger.
    pub fn generate<S: LedgerStore>(
        &mut self,
        ledger: &mut Ledger<S>,
        today: NaiveDate,
    ) -> WeatherOutcome {
        let outcome = roll_weather(Season::from_date(today), &mut self.roller);
        if let Some(duration) = &outcome.duration {
            ledger.add_event(&outcome.condition, duration, today);
        }
        outcome
    }
}
