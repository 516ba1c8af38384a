//! Core types: player ids, RNG, configuration.
//!
//! These are shared by the scoring engine, the roll sources, and the game
//! orchestration layer.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, LastFrameRule, DEFAULT_FRAME_COUNT, MAX_BONUS_ROLLS, PIN_COUNT};
