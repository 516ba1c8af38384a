//! Random roll source.
//!
//! Stands in for a pin-deck sensor. Counts are drawn uniformly from the
//! pins still standing, so every roll is one a real lane could produce.

use tracing::trace;

use crate::core::{GameRng, PIN_COUNT};

use super::RollSource;

/// Seeded random pin counts that respect the rack.
///
/// The source tracks its own rack: pins are reset after the rack is
/// cleared or after two balls, which matches both regular frames and the
/// reset racks of a three-ball last frame.
#[derive(Clone, Debug)]
pub struct RandomRolls {
    rng: GameRng,
    standing: u8,
    balls_in_rack: u8,
}

impl RandomRolls {
    /// Create a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a source from an existing RNG (typically a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            standing: PIN_COUNT,
            balls_in_rack: 0,
        }
    }

    /// Pins standing for the next ball.
    #[must_use]
    pub fn standing(&self) -> u8 {
        self.standing
    }
}

impl RollSource for RandomRolls {
    fn roll(&mut self) -> Option<u8> {
        let pins = self.rng.gen_pins(self.standing);
        self.standing -= pins;
        self.balls_in_rack += 1;

        if self.standing == 0 || self.balls_in_rack == 2 {
            self.standing = PIN_COUNT;
            self.balls_in_rack = 0;
        }

        trace!(pins, standing = self.standing, "random roll");
        Some(pins)
    }

    fn new_game(&mut self) {
        self.standing = PIN_COUNT;
        self.balls_in_rack = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let mut a = RandomRolls::new(99);
        let mut b = RandomRolls::new(99);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_never_exceeds_rack() {
        let mut rolls = RandomRolls::new(3);
        for _ in 0..500 {
            let standing = rolls.standing();
            let pins = rolls.roll().unwrap();
            assert!(pins <= standing);
        }
    }

    #[test]
    fn test_rack_resets_after_two_balls() {
        let mut rolls = RandomRolls::new(11);
        for _ in 0..100 {
            let first = rolls.roll().unwrap();
            if first == PIN_COUNT {
                assert_eq!(rolls.standing(), PIN_COUNT);
                continue;
            }
            assert_eq!(rolls.standing(), PIN_COUNT - first);
            rolls.roll().unwrap();
            assert_eq!(rolls.standing(), PIN_COUNT);
        }
    }

    #[test]
    fn test_new_game_racks_fresh_pins() {
        let mut rolls = RandomRolls::new(5);
        while rolls.standing() == PIN_COUNT {
            rolls.roll().unwrap();
        }
        rolls.new_game();
        assert_eq!(rolls.standing(), PIN_COUNT);
    }
}
