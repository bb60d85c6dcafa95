//! Ongoing event records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A strange-weather condition that spans several calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingEvent {
    /// Resolved condition name (e.g. "Flooding").
    pub condition: String,
    /// Duration label as rolled (e.g. "4 Days").
    pub original_duration: String,
    /// Days still to count, as shown by the next decay pass.
    pub days_remaining: u32,
    /// Day the event was rolled.
    pub start_date: NaiveDate,
}

impl OngoingEvent {
    /// A copy with one day fewer remaining, or `None` once exhausted.
    pub fn decayed(&self) -> Option<Self> {
        let days_remaining = self.days_remaining.checked_sub(1)?;
        (days_remaining > 0).then(|| Self {
            days_remaining,
            ..self.clone()
        })
    }

    /// "1 day" or "N days".
    pub fn remaining_label(&self) -> String {
        if self.days_remaining == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days_remaining)
        }
    }
}

/// Record of the decay pass performed on a calendar day.
///
/// Holds the active events as reported that day so repeated triggers on the
/// same day can reuse them instead of decaying again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayStamp {
    /// Day the decay pass ran.
    pub date: NaiveDate,
    /// Events reported as active on that day, before decay.
    pub active: Vec<OngoingEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(days: u32) -> OngoingEvent {
        OngoingEvent {
            condition: "Flooding".to_string(),
            original_duration: "3 Days".to_string(),
            days_remaining: days,
            start_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        }
    }

    #[test]
    fn decayed_drops_one_day() {
        assert_eq!(event(2).decayed().unwrap().days_remaining, 1);
        assert!(event(1).decayed().is_none());
        assert!(event(0).decayed().is_none());
    }

    #[test]
    fn remaining_label_pluralizes() {
        assert_eq!(event(1).remaining_label(), "1 day");
        assert_eq!(event(4).remaining_label(), "4 days");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(event(2)).unwrap();
        assert_eq!(json["condition"], "Flooding");
        assert_eq!(json["originalDuration"], "3 Days");
        assert_eq!(json["daysRemaining"], 2);
        assert_eq!(json["startDate"], "2026-10-16");
    }
}
