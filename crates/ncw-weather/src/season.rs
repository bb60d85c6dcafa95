//! Calendar seasons.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A season of the year, derived purely from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// December to February.
    Winter,
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Fall,
}

impl Season {
    /// Season for a zero-based month (0 = January, 11 = December).
    ///
    /// Out-of-range months wrap modulo 12.
    pub fn from_month0(month0: u32) -> Self {
        match month0 % 12 {
            11 | 0 | 1 => Self::Winter,
            2..=4 => Self::Spring,
            5..=7 => Self::Summer,
            _ => Self::Fall,
        }
    }

    /// Season for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month0(date.month0())
    }

    /// All seasons in calendar order, starting with winter.
    pub fn all() -> &'static [Self] {
        &[Self::Winter, Self::Spring, Self::Summer, Self::Fall]
    }

    /// Lowercase identifier, as stored in outcomes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winter => write!(f, "Winter"),
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
        }
    }
}
