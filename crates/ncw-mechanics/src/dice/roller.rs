//! Random roll engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Die, DieRoll};

/// A source of die rolls.
///
/// Implementors must return a value in `1..=sides`.
pub trait DiceRoller {
    /// Roll a die with the given number of sides.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll a typed die and keep the die alongside the value.
    fn roll(&mut self, die: Die) -> DieRoll {
        DieRoll {
            die,
            value: self.roll_die(die.sides()),
        }
    }
}

/// Uniform rolls backed by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngRoller<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRoller<StdRng> {
    /// A reproducible roller seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> DiceRoller for RngRoller<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed script of results, cycling when it runs out.
///
/// Each scripted value is clamped into `1..=sides` for the die being rolled.
/// An empty script always rolls the maximum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Create a roller that returns `script` in order.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of rolls made so far.
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        let value = if self.script.is_empty() {
            sides
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value.clamp(1, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seeded_rolls_are_deterministic() {
        let mut a = RngRoller::seeded(99);
        let mut b = RngRoller::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.roll_die(6), b.roll_die(6));
        }
    }

    #[test]
    fn typed_roll_keeps_die() {
        let mut roller = RngRoller::seeded(7);
        let roll = roller.roll(Die::D10);
        assert_eq!(roll.die, Die::D10);
        assert!((1..=10).contains(&roll.value));
    }

    #[test]
    fn scripted_replays_in_order_and_cycles() {
        let mut roller = ScriptedRoller::new(vec![2, 5]);
        assert_eq!(roller.roll_die(6), 2);
        assert_eq!(roller.roll_die(6), 5);
        assert_eq!(roller.roll_die(6), 2);
        assert_eq!(roller.rolls_made(), 3);
    }

    #[test]
    fn scripted_clamps_to_die() {
        let mut roller = ScriptedRoller::new(vec![9, 0]);
        assert_eq!(roller.roll_die(6), 6);
        assert_eq!(roller.roll_die(6), 1);
    }

    #[test]
    fn empty_script_rolls_max() {
        let mut roller = ScriptedRoller::default();
        assert_eq!(roller.roll_die(6), 6);
        assert_eq!(roller.roll_die(10), 10);
    }

    proptest! {
        #[test]
        fn rolls_stay_in_range(seed in any::<u64>(), sides in 1u32..=100) {
            let mut roller = RngRoller::seeded(seed);
            for _ in 0..32 {
                let value = roller.roll_die(sides);
                prop_assert!((1..=sides).contains(&value));
            }
        }
    }
}
