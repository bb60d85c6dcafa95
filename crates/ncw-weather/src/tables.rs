//! Seasonal weather tables and the strange-weather sub-table.
//!
//! Each season carries two independent d6 tables (temperature and
//! condition). One condition slot per season holds [`STRANGE`], which sends
//! the roll on to the d10 strange-weather table.

use crate::season::Season;

/// Sentinel condition that escalates to the strange-weather table.
pub const STRANGE: &str = "Strange";

/// Strange-weather entry whose name depends on the rolled temperature.
pub const COLD_SNAP_HEAT_WAVE: &str = "Cold Snap/Heat Wave";

/// Placeholder in duration templates replaced by a d6 result.
pub const DURATION_PLACEHOLDER: &str = "1d6";

/// Temperature and condition tables for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTable {
    /// Temperature bands, indexed by d6 - 1.
    pub temperature: [&'static str; 6],
    /// Weather conditions, indexed by d6 - 1.
    pub conditions: [&'static str; 6],
}

/// One row of the strange-weather table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrangeEntry {
    /// Condition name.
    pub condition: &'static str,
    /// Duration template containing [`DURATION_PLACEHOLDER`].
    pub duration: &'static str,
}

const WINTER: SeasonTable = SeasonTable {
    temperature: [
        "Cold (Around 35°F/2°C)",
        "Cold (Around 40°F/4°C)",
        "Cold (Around 40°F/4°C)",
        "Cool (Around 50°F/10°C)",
        "Cool (Around 50°F/10°C)",
        "Cool (Around 60°F/15°C)",
    ],
    conditions: [
        "Clear",
        "Light Rain/Sleet",
        "Overcast",
        "Overcast",
        "Heavy Rain/Sleet",
        STRANGE,
    ],
};

const SPRING: SeasonTable = SeasonTable {
    temperature: [
        "Cold (Around 40°F/4°C)",
        "Cool (Around 50°F/10°C)",
        "Cool (Around 50°F/10°C)",
        "Cool (Around 50°F/10°C)",
        "Warm (Around 60°F/15°C)",
        "Warm (Around 70°F/21°C)",
    ],
    conditions: [
        "Clear",
        "Light Rain",
        "Overcast",
        "Light Rain",
        "Heavy Rain",
        STRANGE,
    ],
};

const SUMMER: SeasonTable = SeasonTable {
    temperature: [
        "Warm (Around 60°F/15°C)",
        "Warm (Around 70°F/21°C)",
        "Warm (Around 70°F/21°C)",
        "Hot (Around 80°F/27°C)",
        "Hot (Around 80°F/27°C)",
        "Hot (Around 90°F/32°C)",
    ],
    conditions: [
        "Light Rain",
        "Clear",
        "Overcast",
        "Overcast",
        "Clear",
        STRANGE,
    ],
};

const FALL: SeasonTable = SeasonTable {
    temperature: [
        "Cool (Around 40°F/4°C)",
        "Warm (Around 60°F/15°C)",
        "Warm (Around 60°F/15°C)",
        "Warm (Around 60°F/15°C)",
        "Warm (Around 70°F/21°C)",
        "Hot (Around 80°F/27°C)",
    ],
    conditions: [
        "Light Rain/Sleet",
        "Clear",
        "Overcast",
        "Overcast",
        "Clear",
        STRANGE,
    ],
};

const STRANGE_WEATHER: [StrangeEntry; 10] = [
    StrangeEntry {
        condition: "Radioactive Windstorm",
        duration: "1d6 x 10 Minutes",
    },
    StrangeEntry {
        condition: "Ash Storm",
        duration: "1d6 x 10 Minutes",
    },
    StrangeEntry {
        condition: "Flooding",
        duration: "1d6 Days",
    },
    StrangeEntry {
        condition: "Blood Rain",
        duration: "1d6 Hours",
    },
    StrangeEntry {
        condition: "Acid Rain",
        duration: "1d6 Hours",
    },
    StrangeEntry {
        condition: "Deadly Thunderstorm",
        duration: "1d6 x 10 Minutes",
    },
    StrangeEntry {
        condition: "Inversion Smog",
        duration: "1d6 Days",
    },
    StrangeEntry {
        condition: COLD_SNAP_HEAT_WAVE,
        duration: "1d6 Days",
    },
    StrangeEntry {
        condition: "Dust Storm",
        duration: "1d6 x 10 Minutes",
    },
    StrangeEntry {
        condition: "Blackout",
        duration: "1d6 Days",
    },
];

/// The weather table for a season.
pub fn season_table(season: Season) -> &'static SeasonTable {
    match season {
        Season::Winter => &WINTER,
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Fall => &FALL,
    }
}

/// The strange-weather table.
pub fn strange_table() -> &'static [StrangeEntry; 10] {
    &STRANGE_WEATHER
}

impl StrangeEntry {
    /// Substitute a die result for the placeholder in the duration template.
    pub fn instantiate_duration(&self, roll: u32) -> String {
        self.duration.replacen(DURATION_PLACEHOLDER, &roll.to_string(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_season_has_six_slots() {
        for season in Season::all() {
            let table = season_table(*season);
            assert_eq!(table.temperature.len(), 6);
            assert_eq!(table.conditions.len(), 6);
        }
    }

    #[test]
    fn every_season_has_one_strange_slot() {
        for season in Season::all() {
            let table = season_table(*season);
            let strange = table.conditions.iter().filter(|c| **c == STRANGE).count();
            assert_eq!(strange, 1, "{season}");
            assert_eq!(table.conditions[5], STRANGE);
        }
    }

    #[test]
    fn strange_table_has_ten_entries_with_placeholders() {
        let table = strange_table();
        assert_eq!(table.len(), 10);
        for entry in table {
            assert!(entry.duration.contains(DURATION_PLACEHOLDER));
        }
        assert_eq!(table[7].condition, COLD_SNAP_HEAT_WAVE);
    }

    #[test]
    fn instantiate_duration_replaces_placeholder() {
        let table = strange_table();
        assert_eq!(table[2].instantiate_duration(3), "3 Days");
        assert_eq!(table[3].instantiate_duration(5), "5 Hours");
        assert_eq!(table[0].instantiate_duration(4), "4 x 10 Minutes");
    }
}
