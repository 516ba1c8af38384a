//! Error types for scoring and game orchestration.
//!
//! [`ScoringError`] covers everything that can go wrong inside one player's
//! scorecard during a turn. [`GameError`] wraps those with the player that
//! failed, plus the orchestration mistakes the [`Game`](crate::Game) rejects.

use thiserror::Error;

use crate::core::PlayerId;

/// Why a pin count was rejected by a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RollViolation {
    /// More than ten pins.
    #[error("pin count is outside 0..=10")]
    OutOfRange,
    /// More pins than are standing on the deck.
    #[error("only {standing} pins are standing")]
    ExceedsStanding {
        /// Pins left standing before this roll.
        standing: u8,
    },
    /// The frame has already taken all of its rolls.
    #[error("frame takes no more rolls")]
    FrameComplete,
}

/// Errors raised while recording rolls and resolving fills.
///
/// All of these abort the current turn. The player restores its scorecard
/// to the state it had when the turn began.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A pin count was rejected at the point of recording.
    #[error("invalid roll of {pins} in frame {frame}: {violation}")]
    InvalidRoll {
        /// Frame the roll was meant for.
        frame: usize,
        /// The rejected pin count.
        pins: u8,
        /// Which rule it broke.
        violation: RollViolation,
    },
    /// A bonus roll was routed to a frame that needs no more fills.
    #[error("frame {frame} needs no more fill rolls")]
    FillOverflow {
        /// The frame that was already resolved.
        frame: usize,
    },
    /// A roll that had to be a fill arrived with no frame waiting for one.
    #[error("bonus roll of {pins} arrived with no frame awaiting a fill")]
    EmptyFillQueue {
        /// The orphaned pin count.
        pins: u8,
    },
    /// No frame exists at this index.
    #[error("frame {frame} does not exist")]
    UnknownFrame {
        /// The requested index.
        frame: usize,
    },
    /// A frame was finalized before it took all of its own rolls.
    #[error("frame {frame} still needs rolls")]
    IncompleteFrame {
        /// The unfinished frame.
        frame: usize,
    },
    /// All scoring frames are open and nothing awaits a bonus roll.
    #[error("scorecard already holds all {max_frames} frames")]
    FrameLimit {
        /// Frames per game.
        max_frames: usize,
    },
    /// A turn was requested for a frame other than the player's next one.
    #[error("expected a turn for frame {expected}, got frame {requested}")]
    OutOfTurn {
        /// The frame the player is due to bowl.
        expected: usize,
        /// The frame that was asked for.
        requested: usize,
    },
    /// The roll source stopped supplying pin counts mid-turn.
    #[error("roll source ran dry in frame {frame}")]
    RollSourceExhausted {
        /// Frame that was waiting on a roll.
        frame: usize,
    },
    /// Bonus rolls ran out while frames still awaited fills.
    #[error("{pending} frame(s) still awaiting fills after the bonus rolls")]
    UnresolvedFills {
        /// Frames left in the fill queue.
        pending: usize,
    },
}

/// Errors raised by the game orchestration layer.
#[derive(Debug, Error)]
pub enum GameError {
    /// Player names must contain at least one non-whitespace character.
    #[error("player name must not be empty")]
    EmptyName,
    /// A player with this id is already registered.
    #[error("player {id} is already in the game")]
    DuplicatePlayer {
        /// The colliding id.
        id: PlayerId,
    },
    /// No player with this id is registered.
    #[error("no player {id} in the game")]
    UnknownPlayer {
        /// The missing id.
        id: PlayerId,
    },
    /// `start` has not been called since players were added.
    #[error("game has not been started")]
    NotStarted,
    /// The game needs at least one player.
    #[error("game has no players")]
    NoPlayers,
    /// Every frame has already been bowled.
    #[error("all {frames} frames have been bowled")]
    GameOver {
        /// Frames per game.
        frames: usize,
    },
    /// A player's turn failed; their scorecard was rolled back.
    #[error("turn failed for player {player}")]
    Turn {
        /// Whose turn it was.
        player: PlayerId,
        /// What went wrong.
        #[source]
        source: ScoringError,
    },
}
