//! Game orchestration: players, turn sequencing, winner selection.
//!
//! A thin layer over the scoring engine. Each [`Player`] owns an
//! independent scorecard and roll source; the [`Game`] drives every player
//! through the same frame before moving on, and picks the winner.

mod game;
mod player;
mod record;

pub use game::Game;
pub use player::Player;
pub use record::{GameRecord, PlayerRecord};
