//! Severity classes used to style a report.

use serde::{Deserialize, Serialize};

/// Coarse hazard category of a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Ordinary weather.
    #[default]
    Standard,
    /// Blood rain.
    Biohazard,
    /// Acid rain.
    Corrosive,
    /// Wind-driven ash or dust storms.
    Storm,
    /// Radioactive fallout.
    Radioactive,
}

/// Condition name to severity class. Unlisted conditions are [`Severity::Standard`].
const SEVERITY_BY_CONDITION: &[(&str, Severity)] = &[
    ("Blood Rain", Severity::Biohazard),
    ("Acid Rain", Severity::Corrosive),
    ("Ash Storm", Severity::Storm),
    ("Dust Storm", Severity::Storm),
    ("Radioactive Windstorm", Severity::Radioactive),
];

impl Severity {
    /// Severity class for an exact condition name.
    pub fn for_condition(condition: &str) -> Self {
        SEVERITY_BY_CONDITION
            .iter()
            .find(|(name, _)| *name == condition)
            .map_or(Self::Standard, |(_, severity)| *severity)
    }

    /// Embed colour as a 24-bit RGB value.
    pub fn color(self) -> u32 {
        match self {
            Self::Standard => 0x00BFFF,
            Self::Biohazard => 0xFF0000,
            Self::Corrosive => 0xFFFF00,
            Self::Storm => 0x800080,
            Self::Radioactive => 0x00FF00,
        }
    }

    /// Colour as a `#RRGGBB` string.
    pub fn hex(self) -> String {
        format!("#{:06X}", self.color())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Biohazard => write!(f, "biohazard"),
            Self::Corrosive => write!(f, "corrosive"),
            Self::Storm => write!(f, "storm"),
            Self::Radioactive => write!(f, "radioactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_by_exact_name() {
        assert_eq!(Severity::for_condition("Blood Rain"), Severity::Biohazard);
        assert_eq!(Severity::for_condition("Acid Rain"), Severity::Corrosive);
        assert_eq!(Severity::for_condition("Dust Storm"), Severity::Storm);
        assert_eq!(
            Severity::for_condition("Radioactive Windstorm"),
            Severity::Radioactive
        );
        assert_eq!(
            Severity::for_condition("Deadly Thunderstorm"),
            Severity::Standard
        );
        assert_eq!(Severity::for_condition("Clear"), Severity::Standard);
    }

    #[test]
    fn colors() {
        assert_eq!(Severity::Standard.hex(), "#00BFFF");
        assert_eq!(Severity::Biohazard.hex(), "#FF0000");
        assert_eq!(Severity::Storm.color(), 0x800080);
    }
}
