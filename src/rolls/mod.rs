//! Roll sources: where pin counts come from.
//!
//! The scoring engine never decides how many pins fall. It asks a
//! [`RollSource`] for the next count and validates whatever comes back.
//!
//! - [`ScriptedRolls`]: a fixed sequence, or one value forever
//! - [`RandomRolls`]: seeded random counts that respect standing pins
//! - any `FnMut() -> Option<u8>` closure (human input, network, ...)
//!
//! ```
//! use rust_bowling::rolls::{RollSource, ScriptedRolls};
//!
//! let mut rolls = ScriptedRolls::new([10, 7, 3]);
//! assert_eq!(rolls.roll(), Some(10));
//! assert_eq!(rolls.remaining(), 2);
//!
//! let mut always_five = ScriptedRolls::repeat(5);
//! assert_eq!(always_five.roll(), Some(5));
//! assert_eq!(always_five.roll(), Some(5));
//! ```

mod random;
mod scripted;

pub use random::RandomRolls;
pub use scripted::ScriptedRolls;

/// Supplies the pin count for each ball on demand.
///
/// Returns `None` when the source has nothing more to give. Counts are not
/// trusted: anything outside what the frame allows is an invalid roll.
pub trait RollSource {
    /// Pins knocked down by the next ball.
    fn roll(&mut self) -> Option<u8>;

    /// Called when the player's scorecard is reset for a new game.
    fn new_game(&mut self) {}
}

impl<F> RollSource for F
where
    F: FnMut() -> Option<u8>,
{
    fn roll(&mut self) -> Option<u8> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let mut count = 0u8;
        let mut source = move || {
            count += 1;
            (count <= 3).then_some(count)
        };

        assert_eq!(source.roll(), Some(1));
        assert_eq!(source.roll(), Some(2));
        assert_eq!(source.roll(), Some(3));
        assert_eq!(source.roll(), None);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn RollSource> = Box::new(ScriptedRolls::new([4]));
        assert_eq!(source.roll(), Some(4));
        assert_eq!(source.roll(), None);
    }
}
