//! Multiplayer game orchestration.

use tracing::info;

use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::GameError;
use crate::rolls::{RandomRolls, RollSource};

use super::player::Player;
use super::record::{GameRecord, PlayerRecord};

/// A game: the field of players, advanced one frame at a time in lock-step.
///
/// ## Example
///
/// ```
/// use rust_bowling::{Game, GameConfig, ScriptedRolls};
///
/// let mut game = Game::new(GameConfig::default());
/// game.add_player_with_source("The Dude", ScriptedRolls::repeat(5)).unwrap();
/// game.add_player_with_source("Walter", ScriptedRolls::repeat(10)).unwrap();
/// game.start().unwrap();
///
/// game.play_out().unwrap();
/// let winner = game.end_game().unwrap();
/// assert_eq!(winner.name(), "Walter");
/// assert_eq!(winner.score(), 300);
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    current_frame: usize,
    started: bool,
    rng: GameRng,
    history: Vec<GameRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create an empty game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            players: PlayerMap::new(),
            current_frame: 0,
            started: false,
            rng,
            history: Vec::new(),
        }
    }

    /// The game's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Register a player bowling with a seeded random roll source.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        let rolls = RandomRolls::from_rng(self.rng.fork());
        self.register(name, Box::new(rolls))
    }

    /// Register a player bowling with the given roll source.
    pub fn add_player_with_source(
        &mut self,
        name: &str,
        rolls: impl RollSource + 'static,
    ) -> Result<PlayerId, GameError> {
        self.register(name, Box::new(rolls))
    }

    /// Adding a player requires `start` to be called again.
    fn register(&mut self, name: &str, rolls: Box<dyn RollSource>) -> Result<PlayerId, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }

        let id = PlayerId::from_name(name, self.players.len());
        let player = Player::new(id.clone(), name, &self.config, rolls);
        if self.players.insert(id.clone(), player).is_err() {
            return Err(GameError::DuplicatePlayer { id });
        }

        self.started = false;
        Ok(id)
    }

    /// Reset every scorecard and rewind to the first frame.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.current_frame = 0;
        self.started = true;

        info!(
            players = self.players.len(),
            frames = self.config.frame_count,
            "game started"
        );
        Ok(())
    }

    /// Bowl the current frame for every player, then advance.
    ///
    /// If a player's turn fails, players before them keep their frame and
    /// the pointer stays put, so calling again resumes with the player
    /// that failed.
    pub fn bowl_frame(&mut self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.is_over() {
            return Err(GameError::GameOver {
                frames: self.config.frame_count,
            });
        }

        let frame = self.current_frame;
        for (id, player) in self.players.iter_mut() {
            if player.turn() > frame {
                continue;
            }
            player
                .take_turn(frame)
                .map_err(|source| GameError::Turn {
                    player: id.clone(),
                    source,
                })?;
        }

        self.current_frame += 1;
        Ok(())
    }

    /// Bowl every remaining frame.
    pub fn play_out(&mut self) -> Result<(), GameError> {
        while !self.is_over() {
            self.bowl_frame()?;
        }
        Ok(())
    }

    /// Every frame has been bowled by the whole field.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current_frame >= self.config.frame_count
    }

    /// Index of the frame the field bowls next.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Look up a player for mutation (e.g. to swap its roll source).
    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// Players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A player's current score.
    pub fn score_of(&self, id: &PlayerId) -> Result<u32, GameError> {
        self.players
            .get(id)
            .map(Player::score)
            .ok_or_else(|| GameError::UnknownPlayer { id: id.clone() })
    }

    /// The player with the strictly highest score.
    ///
    /// Ties go to whoever registered first: a later player only takes the
    /// lead by beating the current leader outright.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let mut leader: Option<&Player> = None;
        for player in self.players.values() {
            if leader.map_or(true, |l| player.score() > l.score()) {
                leader = Some(player);
            }
        }
        leader
    }

    /// Players ranked by score, highest first; ties keep registration order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.values().collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked
    }

    /// Record the final state in the history and return the winner.
    pub fn end_game(&mut self) -> Option<&Player> {
        let record = GameRecord {
            frames_bowled: self.current_frame,
            players: self.players.values().map(PlayerRecord::from).collect(),
            winner: self.winner().map(|p| p.id().clone()),
        };

        match &record.winner {
            Some(id) => info!(winner = %id, score = self.score_of(id).unwrap_or(0), "game ended"),
            None => info!("game ended without players"),
        }
        self.history.push(record);

        self.winner()
    }

    /// Records of every ended game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }
}
