//! Dice mechanics for the Night City weather reporter.
//!
//! Table lookups are driven by polyhedral dice. Rolls go through the
//! [`DiceRoller`] trait so that production code can use a seeded or
//! OS-seeded RNG while tests script exact results.

pub mod dice;

pub use dice::{DiceRoller, Die, DieRoll, RngRoller, ScriptedRoller};
