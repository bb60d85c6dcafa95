//! Dice types and rolling.
//!
//! Weather tables are indexed by a single die: a d6 for the seasonal tables
//! and duration multipliers, a d10 for the strange-weather table.

pub mod roller;

pub use roller::{DiceRoller, RngRoller, ScriptedRoller};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Ten-sided die.
    D10,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D10 => 10,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D6 => write!(f, "d6"),
            Self::D10 => write!(f, "d10"),
        }
    }
}

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

impl DieRoll {
    /// Zero-based table index for this roll (`value - 1`).
    pub fn index(self) -> usize {
        self.value.saturating_sub(1) as usize
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.die, self.value)
    }
}
