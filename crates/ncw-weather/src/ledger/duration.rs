//! Duration label parsing.
//!
//! Strange-weather durations are rolled as labels like "3 Days",
//! "20 Hours" or "4 x 10 Minutes". The ledger only cares how many calendar
//! days a label covers, counting the day it was rolled as day one.

/// A parsed duration label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDuration {
    /// Whole days.
    Days(u32),
    /// Hours.
    Hours(u32),
    /// Minutes (already multiplied out for "N x M Minutes").
    Minutes(u32),
}

impl EventDuration {
    /// Parse a label by its unit keyword. Returns `None` for unknown units.
    ///
    /// A missing or non-numeric leading count reads as zero.
    pub fn parse(label: &str) -> Option<Self> {
        let count = leading_number(label);
        if label.contains("Days") {
            Some(Self::Days(count))
        } else if label.contains("Hours") {
            Some(Self::Hours(count))
        } else if label.contains("Minutes") {
            let multiplier = label
                .split_once(" x ")
                .map(|(_, rest)| leading_number(rest))
                .unwrap_or(1);
            Some(Self::Minutes(count.saturating_mul(multiplier)))
        } else {
            None
        }
    }

    /// Calendar days covered, today included.
    pub fn days(self) -> u32 {
        match self {
            Self::Days(n) => n,
            Self::Hours(h) if h < 24 => 1,
            Self::Hours(h) => h.div_ceil(24),
            Self::Minutes(_) => 1,
        }
    }
}

/// Whole days covered by a duration label; unknown labels cover zero days.
pub fn duration_days(label: &str) -> u32 {
    EventDuration::parse(label).map_or(0, EventDuration::days)
}

fn leading_number(s: &str) -> u32 {
    s.split_whitespace()
        .next()
        .and_then(|word| word.parse().ok())
        .unwrap_or(0)
}
