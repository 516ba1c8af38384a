//! # rust-bowling
//!
//! Running and final scores for multiplayer ten-pin bowling, fed one pin
//! count at a time.
//!
//! ## Design Principles
//!
//! 1. **Deferred bonuses**: A strike or spare cannot be scored when it is
//!    bowled. Such frames wait in a FIFO fill queue and are scored, exactly
//!    once, on the ball that pays their last bonus.
//!
//! 2. **Monotonic score**: The running score only grows, and only when a
//!    frame is fully resolved.
//!
//! 3. **Opaque roll sources**: The engine never decides how many pins fall.
//!    Scripted, random, and human-driven sources are interchangeable.
//!
//! ## Architecture
//!
//! - **All-or-nothing turns**: A player checkpoints its scorecard before a
//!   turn and restores it if any roll is rejected.
//!
//! - **Bounded endgame**: Bonus balls owed after the last frame are
//!   collected in an explicit phase of at most two rolls.
//!
//! ## Modules
//!
//! - `core`: Player ids, deterministic RNG, configuration
//! - `scoring`: Frames and scorecards
//! - `rolls`: Roll sources
//! - `game`: Players, turn sequencing, winner selection
//! - `error`: Scoring and game errors

pub mod core;
pub mod error;
pub mod scoring;
pub mod rolls;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, LastFrameRule, DEFAULT_FRAME_COUNT, MAX_BONUS_ROLLS, PIN_COUNT,
};

pub use crate::error::{GameError, RollViolation, ScoringError};

pub use crate::scoring::{Frame, FrameKind, Scorecard};

pub use crate::rolls::{RandomRolls, RollSource, ScriptedRolls};

pub use crate::game::{Game, GameRecord, Player, PlayerRecord};
