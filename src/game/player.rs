//! A bowler: identity, scorecard, and the turn protocol.

use tracing::{debug, warn};

use crate::core::{GameConfig, PlayerId, MAX_BONUS_ROLLS};
use crate::error::ScoringError;
use crate::rolls::RollSource;
use crate::scoring::Scorecard;

/// One participant, driving turns against their own roll source.
pub struct Player {
    id: PlayerId,
    name: String,
    scorecard: Scorecard,
    rolls: Box<dyn RollSource>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("score", &self.scorecard.score())
            .field("turn", &self.turn())
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Create a player with an empty scorecard.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        config: &GameConfig,
        rolls: Box<dyn RollSource>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            scorecard: Scorecard::new(config.frame_count, config.last_frame),
            rolls,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's scorecard.
    #[must_use]
    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// Current running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.scorecard.score()
    }

    /// Frames bowled so far; also the index of the next frame to bowl.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.scorecard.frames().len()
    }

    /// All frames bowled and every bonus paid.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.scorecard.is_finished()
    }

    /// Swap in a different roll source.
    pub fn set_roll_source(&mut self, rolls: Box<dyn RollSource>) {
        self.rolls = rolls;
    }

    /// Throw away the scorecard and start over.
    pub fn reset(&mut self) {
        self.scorecard = Scorecard::new(
            self.scorecard.max_frames(),
            self.scorecard.last_frame_rule(),
        );
        self.rolls.new_game();
    }

    /// Bowl the player's next frame.
    pub fn take_next_turn(&mut self) -> Result<(), ScoringError> {
        self.take_turn(self.turn())
    }

    /// Bowl frame `frame_num`, which must be the player's next frame.
    ///
    /// On the last frame this also collects any bonus balls still owed. The
    /// turn is all-or-nothing: on error the scorecard is restored to what it
    /// was before the turn began.
    pub fn take_turn(&mut self, frame_num: usize) -> Result<(), ScoringError> {
        let expected = self.turn();
        if frame_num != expected {
            return Err(ScoringError::OutOfTurn {
                expected,
                requested: frame_num,
            });
        }

        let checkpoint = self.scorecard.clone();
        match self.play_frame() {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(player = %self.id, frame = frame_num, error = %err, "turn aborted");
                self.scorecard = checkpoint;
                Err(err)
            }
        }
    }

    fn play_frame(&mut self) -> Result<(), ScoringError> {
        let frame = self.scorecard.open_frame()?;

        while self.scorecard.frame(frame)?.needs_bowls() {
            let pins = self.next_roll(frame)?;
            self.scorecard.check_roll(frame, pins)?;
            self.scorecard.resolve_fills(pins)?;
            self.scorecard.record_frame_roll(frame, pins)?;
        }
        self.scorecard.finalize_frame(frame)?;

        if self.scorecard.is_last_frame() && self.scorecard.needs_fills() {
            self.collect_bonus_rolls()?;
        }

        debug!(
            player = %self.id,
            frame,
            score = self.scorecard.score(),
            "turn complete"
        );
        Ok(())
    }

    /// Bowl into bonus frames until every pending fill is paid.
    fn collect_bonus_rolls(&mut self) -> Result<(), ScoringError> {
        let mut bonus_frame: Option<usize> = None;

        for _ in 0..MAX_BONUS_ROLLS {
            if !self.scorecard.needs_fills() {
                break;
            }

            let frame = match bonus_frame {
                Some(f) if self.scorecard.frame(f)?.needs_bowls() => f,
                _ => self.scorecard.open_frame()?,
            };
            bonus_frame = Some(frame);

            let pins = self.next_roll(frame)?;
            self.scorecard.check_roll(frame, pins)?;
            self.scorecard.apply_bonus_roll(pins)?;
            self.scorecard.record_frame_roll(frame, pins)?;
        }

        if self.scorecard.needs_fills() {
            return Err(ScoringError::UnresolvedFills {
                pending: self.scorecard.pending_fills(),
            });
        }

        self.scorecard.remove_extra_frames();
        Ok(())
    }

    fn next_roll(&mut self, frame: usize) -> Result<u8, ScoringError> {
        self.rolls
            .roll()
            .ok_or(ScoringError::RollSourceExhausted { frame })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LastFrameRule;
    use crate::error::RollViolation;
    use crate::rolls::ScriptedRolls;

    fn player_with(config: &GameConfig, rolls: Vec<u8>) -> Player {
        Player::new(
            PlayerId::from_name("The Dude", 0),
            "The Dude",
            config,
            Box::new(ScriptedRolls::new(rolls)),
        )
    }

    fn bowl_all(player: &mut Player) {
        while !player.is_done() {
            player.take_next_turn().unwrap();
        }
    }

    #[test]
    fn test_perfect_game_both_rules() {
        for rule in [LastFrameRule::ThreeBall, LastFrameRule::BonusFrames] {
            let config = GameConfig::new().with_last_frame_rule(rule);
            let mut player = player_with(&config, vec![10; 12]);
            bowl_all(&mut player);
            assert_eq!(player.score(), 300);
            assert_eq!(player.scorecard().frames().len(), 10);
            assert_eq!(player.turn(), 10);
        }
    }

    #[test]
    fn test_bonus_frames_take_exactly_two_rolls() {
        let config = GameConfig::new().with_last_frame_rule(LastFrameRule::BonusFrames);
        let mut rolls = vec![0; 18];
        rolls.extend([10, 3, 4, 9, 9]);
        let mut player = player_with(&config, rolls);
        bowl_all(&mut player);

        assert_eq!(player.score(), 17);
        let last = &player.scorecard().frames()[9];
        assert_eq!(last.rolls(), &[10]);
        assert_eq!(last.fill_rolls(), &[3, 4]);
    }

    #[test]
    fn test_bonus_frames_validate_rack() {
        let config = GameConfig::new().with_last_frame_rule(LastFrameRule::BonusFrames);
        let mut rolls = vec![0; 18];
        rolls.extend([10, 7, 5]);
        let mut player = player_with(&config, rolls);
        for _ in 0..9 {
            player.take_next_turn().unwrap();
        }

        let err = player.take_next_turn().unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidRoll {
                frame: 10,
                pins: 5,
                violation: RollViolation::ExceedsStanding { standing: 3 },
            }
        );
        assert_eq!(player.turn(), 9);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_failed_turn_restores_scorecard() {
        let config = GameConfig::new();
        let mut player = player_with(&config, vec![5, 5, 6, 7]);
        player.take_next_turn().unwrap();
        assert_eq!(player.score(), 0);
        assert_eq!(player.scorecard().pending_fills(), 1);

        // 6 would pay the spare, then 7 is rejected
        let err = player.take_next_turn().unwrap_err();
        assert!(matches!(err, ScoringError::InvalidRoll { frame: 1, pins: 7, .. }));
        assert_eq!(player.score(), 0);
        assert_eq!(player.turn(), 1);
        assert_eq!(player.scorecard().pending_fills(), 1);
        assert!(player.scorecard().frames()[0].fill_rolls().is_empty());
    }

    #[test]
    fn test_out_of_turn() {
        let config = GameConfig::new();
        let mut player = player_with(&config, vec![1, 1]);
        assert_eq!(
            player.take_turn(3),
            Err(ScoringError::OutOfTurn {
                expected: 0,
                requested: 3
            })
        );
    }

    #[test]
    fn test_exhausted_source() {
        let config = GameConfig::new();
        let mut player = player_with(&config, vec![4]);
        assert_eq!(
            player.take_next_turn(),
            Err(ScoringError::RollSourceExhausted { frame: 0 })
        );
        assert_eq!(player.turn(), 0);
    }

    #[test]
    fn test_reset() {
        let config = GameConfig::new().with_frames(3);
        let mut player = player_with(&config, vec![3; 6]);
        bowl_all(&mut player);
        assert_eq!(player.score(), 18);

        player.reset();
        assert_eq!(player.score(), 0);
        assert_eq!(player.turn(), 0);
        assert_eq!(player.scorecard().max_frames(), 3);
    }

    #[test]
    fn test_turn_after_game_is_rejected() {
        let config = GameConfig::new().with_frames(1);
        let mut player = player_with(&config, vec![2, 2, 2]);
        bowl_all(&mut player);
        assert_eq!(
            player.take_next_turn(),
            Err(ScoringError::FrameLimit { max_frames: 1 })
        );
        assert_eq!(player.score(), 4);
    }
}
