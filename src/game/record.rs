//! Snapshots of finished games.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::scoring::Scorecard;

use super::player::Player;

/// One player's final state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub scorecard: Scorecard,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().clone(),
            name: player.name().to_string(),
            score: player.score(),
            scorecard: player.scorecard().clone(),
        }
    }
}

/// A game as it stood when `end_game` was called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Frames the whole field had bowled.
    pub frames_bowled: usize,
    /// Players in registration order.
    pub players: Vec<PlayerRecord>,
    /// Highest scorer, first registered on ties.
    pub winner: Option<PlayerId>,
}

impl GameRecord {
    /// Look up a player's record.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| &p.id == id)
    }
}
