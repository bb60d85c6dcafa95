//! Report rendering.
//!
//! Turns a [`WeatherOutcome`] and the day's active ongoing events into a
//! [`Report`]: a structured broadcast that can be printed as text or posted
//! as a chat embed. Rendering is a pure mapping over static tables.

pub mod advisory;
pub mod severity;

pub use advisory::{BLACKOUT_BULLETIN, SOURCE_LINK};
pub use severity::Severity;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::generator::WeatherOutcome;
use crate::ledger::OngoingEvent;
use crate::season::Season;

/// Report headline.
pub const TITLE: &str = "🏙️ NCWR - NIGHT CITY WEATHER REPORT";

/// Zero-width space, for embed fields that only take up room.
const BLANK: &str = "\u{200b}";

/// Rule drawn above the standing bulletin.
const SEPARATOR: &str = "▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬";

/// Default in-setting year for broadcast dates.
pub const DEFAULT_FICTIONAL_YEAR: i32 = 2047;

/// Presentation settings that are not part of the rolled weather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the broadcast date in place of the real one.
    pub fictional_year: i32,
    /// Standing notice appended to every report.
    pub bulletin: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fictional_year: DEFAULT_FICTIONAL_YEAR,
            bulletin: Some(BLACKOUT_BULLETIN.to_string()),
        }
    }
}

/// A rendered weather broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Headline.
    pub title: String,
    /// Hazard class of the condition.
    pub severity: Severity,
    /// e.g. "Friday, October 16, 2047".
    pub broadcast_date: String,
    /// Temperature band.
    pub temperature: String,
    /// Weather condition.
    pub condition: String,
    /// Duration for strange weather.
    pub duration: Option<String>,
    /// One line per event continuing from previous days.
    pub continuing: Vec<String>,
    /// Emergency broadcast line, for hazardous conditions.
    pub emergency: Option<String>,
    /// Mechanical effects, temperature first.
    pub advisories: Vec<String>,
    /// Standing notice.
    pub bulletin: Option<String>,
    /// e.g. "NCWR • Fall • Time of the Red".
    pub footer: String,
}

/// Broadcast date: real weekday, month and day with the year replaced.
pub fn broadcast_date(today: NaiveDate, fictional_year: i32) -> String {
    format!("{}, {fictional_year}", today.format("%A, %B %-d"))
}

/// Footer line naming the season.
pub fn footer(season: Season) -> String {
    format!("NCWR • {season} • Time of the Red")
}

/// "<condition> - N day(s) remaining".
pub fn continuing_line(event: &OngoingEvent) -> String {
    format!("{} - {} remaining", event.condition, event.remaining_label())
}

/// Render a report for `outcome` on `today`.
pub fn render(
    outcome: &WeatherOutcome,
    active_events: &[OngoingEvent],
    options: &RenderOptions,
    today: NaiveDate,
) -> Report {
    Report {
        title: TITLE.to_string(),
        severity: Severity::for_condition(&outcome.condition),
        broadcast_date: broadcast_date(today, options.fictional_year),
        temperature: outcome.temperature.clone(),
        condition: outcome.condition.clone(),
        duration: outcome.duration.clone(),
        continuing: active_events.iter().map(continuing_line).collect(),
        emergency: advisory::emergency_for(&outcome.condition).map(str::to_string),
        advisories: advisory::advisories(&outcome.temperature, &outcome.condition),
        bulletin: options.bulletin.clone(),
        footer: footer(outcome.season),
    }
}

impl Report {
    /// Chat embed payload (title, colour, description, fields, footer).
    ///
    /// The sender adds the timestamp.
    pub fn to_embed(&self) -> Value {
        let mut fields = vec![
            field("BROADCAST DATE", &self.broadcast_date, false),
            field("🌡️ TEMPERATURE", &self.temperature, true),
            field("☁️ CONDITIONS", &self.condition, true),
            field(BLANK, BLANK, true),
        ];
        if let Some(duration) = &self.duration {
            fields.push(field("⏱️ DURATION", duration, true));
        }
        if !self.continuing.is_empty() {
            let lines: Vec<String> = self
                .continuing
                .iter()
                .map(|line| format!("🔄 {line}"))
                .collect();
            fields.push(field("🔄 CONTINUING FROM PREVIOUS DAYS", &lines.join("\n"), false));
        }
        if !self.advisories.is_empty() {
            fields.push(field("❗ ADVISORY", &self.advisories.join("\n\n"), false));
        }
        if let Some(bulletin) = &self.bulletin {
            fields.push(field(SEPARATOR, BLANK, false));
            fields.push(field("⚡ ONGOING EVENT", bulletin, false));
        }

        let mut embed = json!({
            "title": self.title,
            "color": self.severity.color(),
            "fields": fields,
            "footer": { "text": self.footer },
        });
        if let Some(emergency) = &self.emergency {
            embed["description"] = json!(emergency);
        }
        embed
    }
}

fn field(name: &str, value: &str, inline: bool) -> Value {
    json!({ "name": name, "value": value, "inline": inline })
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "**{}**", self.title)?;
        if let Some(emergency) = &self.emergency {
            writeln!(f, "{emergency}")?;
        }
        writeln!(f)?;
        writeln!(f, "BROADCAST DATE: {}", self.broadcast_date)?;
        writeln!(f, "🌡️ TEMPERATURE: {}", self.temperature)?;
        writeln!(f, "☁️ CONDITIONS: {}", self.condition)?;
        if let Some(duration) = &self.duration {
            writeln!(f, "⏱️ DURATION: {duration}")?;
        }
        if !self.continuing.is_empty() {
            writeln!(f)?;
            writeln!(f, "🔄 CONTINUING FROM PREVIOUS DAYS")?;
            for line in &self.continuing {
                writeln!(f, "  {line}")?;
            }
        }
        if !self.advisories.is_empty() {
            writeln!(f)?;
            writeln!(f, "❗ ADVISORY")?;
            for advisory in &self.advisories {
                writeln!(f, "{advisory}")?;
                writeln!(f)?;
            }
        }
        if let Some(bulletin) = &self.bulletin {
            writeln!(f)?;
            writeln!(f, "⚡ ONGOING EVENT")?;
            writeln!(f, "{bulletin}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}
