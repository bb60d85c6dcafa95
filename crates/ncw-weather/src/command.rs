//! Chat command recognition and help text.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use serde_json::{Value, json};

/// A recognized chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!weather`: roll and report the weather.
    Weather,
    /// `!weather help`: list commands.
    Help,
}

impl Command {
    /// Recognize a chat message. Matching is case-insensitive and exact
    /// apart from surrounding whitespace; anything else is ignored.
    pub fn parse(message: &str) -> Option<Self> {
        match message.trim().to_lowercase().as_str() {
            "!weather" => Some(Self::Weather),
            "!weather help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Help card listing the bot's commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Help {
    /// Card title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// `(name, explanation)` pairs.
    pub entries: Vec<(String, String)>,
}

impl Help {
    /// Help text for a bot that posts daily at `post_time`.
    pub fn new(post_time: NaiveTime) -> Self {
        Self {
            title: "🤖 Night City Weather Bot Commands".to_string(),
            description: "Based on the official Night City Weather tables from Cyberpunk RED"
                .to_string(),
            entries: vec![
                (
                    "!weather".to_string(),
                    "Roll current weather conditions".to_string(),
                ),
                (
                    "Daily Posts".to_string(),
                    format!(
                        "Bot automatically posts weather at {} daily",
                        format_post_time(post_time)
                    ),
                ),
            ],
        }
    }

    /// Chat embed payload.
    pub fn to_embed(&self) -> Value {
        let fields: Vec<Value> = self
            .entries
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect();
        json!({
            "title": self.title,
            "description": self.description,
            "color": 0x00BFFF,
            "fields": fields,
        })
    }
}

impl std::fmt::Display for Help {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "**{}**", self.title)?;
        writeln!(f, "{}", self.description)?;
        for (name, value) in &self.entries {
            write!(f, "\n  {name:<12} {value}")?;
        }
        Ok(())
    }
}

/// "8 AM", "6:30 PM".
fn format_post_time(time: NaiveTime) -> String {
    if time.minute() == 0 {
        time.format("%-I %p").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}
