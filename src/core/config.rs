//! Game configuration.
//!
//! A `GameConfig` fixes how many frames a game has, how the last frame
//! collects its bonus balls, and the seed used for random roll sources.

use serde::{Deserialize, Serialize};

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Frames in a regulation game.
pub const DEFAULT_FRAME_COUNT: usize = 10;

/// Most bonus rolls a game can owe once the last frame is bowled.
pub const MAX_BONUS_ROLLS: usize = 2;

/// How the last frame takes the bonus balls for its own strike or spare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LastFrameRule {
    /// The last frame holds up to three balls, with the rack reset after a
    /// strike or spare. Bonus balls are the frame's own rolls.
    #[default]
    ThreeBall,
    /// The last frame is an ordinary frame. Its bonus balls are bowled into
    /// bookkeeping frames past the end of the game, which are trimmed once
    /// every fill is resolved.
    BonusFrames,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Frames per game (at least 1).
    pub frame_count: usize,

    /// Last-frame bonus handling.
    pub last_frame: LastFrameRule,

    /// Seed for the default random roll sources.
    /// Same seed produces the same games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            last_frame: LastFrameRule::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create the regulation configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames.
    #[must_use]
    pub fn with_frames(mut self, frame_count: usize) -> Self {
        assert!(frame_count > 0, "Must have at least 1 frame");
        self.frame_count = frame_count;
        self
    }

    /// Set the last-frame rule.
    #[must_use]
    pub fn with_last_frame_rule(mut self, rule: LastFrameRule) -> Self {
        self.last_frame = rule;
        self
    }

    /// Set the seed for random roll sources.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
