//! Property tests: scorecards agree with a direct ten-pin scorer.
//!
//! Games are generated from raw triples folded into legal racks, so every
//! generated roll sequence is a complete, valid ten-frame game.

use proptest::prelude::*;

use rust_bowling::{
    Game, GameConfig, LastFrameRule, Player, PlayerId, ScriptedRolls, PIN_COUNT,
};

/// Fold raw per-frame triples into the rolls of a legal game.
fn legal_game(raw: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut rolls = Vec::with_capacity(21);
    let (last, regular) = raw.split_last().expect("at least one frame");

    for &(a, b, _) in regular {
        if a == PIN_COUNT {
            rolls.push(a);
        } else {
            rolls.extend([a, b % (PIN_COUNT + 1 - a)]);
        }
    }

    let (a, b, c) = *last;
    if a == PIN_COUNT {
        let c = if b == PIN_COUNT { c } else { c % (PIN_COUNT + 1 - b) };
        rolls.extend([a, b, c]);
    } else {
        let b = b % (PIN_COUNT + 1 - a);
        rolls.extend([a, b]);
        if a + b == PIN_COUNT {
            rolls.push(c);
        }
    }
    rolls
}

/// Score a complete game by looking ahead in the flat roll list.
fn reference_score(rolls: &[u8]) -> u32 {
    let r = |i: usize| u32::from(rolls[i]);
    let mut score = 0;
    let mut i = 0;
    for _ in 0..10 {
        if rolls[i] == PIN_COUNT {
            score += 10 + r(i + 1) + r(i + 2);
            i += 1;
        } else if r(i) + r(i + 1) == 10 {
            score += 10 + r(i + 2);
            i += 2;
        } else {
            score += r(i) + r(i + 1);
            i += 2;
        }
    }
    score
}

/// Strikes show up often enough to exercise fill chains.
fn ball() -> impl Strategy<Value = u8> {
    prop_oneof![3 => Just(PIN_COUNT), 7 => 0..=PIN_COUNT]
}

fn game_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec((ball(), ball(), ball()), 10).prop_map(|raw| legal_game(&raw))
}

fn play(rule: LastFrameRule, rolls: &[u8]) -> (Player, Vec<u32>) {
    let config = GameConfig::new().with_last_frame_rule(rule);
    let mut player = Player::new(
        PlayerId::from_name("Walter", 0),
        "Walter",
        &config,
        Box::new(ScriptedRolls::new(rolls.to_vec())),
    );

    let mut after_each_turn = Vec::with_capacity(10);
    for _ in 0..10 {
        player.take_next_turn().unwrap();
        after_each_turn.push(player.score());
    }
    (player, after_each_turn)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: final score equals the look-ahead reference scorer.
    #[test]
    fn prop_matches_reference(rolls in game_strategy()) {
        let expected = reference_score(&rolls);
        for rule in [LastFrameRule::ThreeBall, LastFrameRule::BonusFrames] {
            let (player, _) = play(rule, &rolls);
            prop_assert_eq!(player.score(), expected);
            prop_assert!(player.is_done());
            prop_assert_eq!(player.scorecard().frames().len(), 10);
        }
    }

    /// Property: the running score never decreases.
    #[test]
    fn prop_score_is_monotonic(rolls in game_strategy()) {
        let (_, scores) = play(LastFrameRule::ThreeBall, &rolls);
        prop_assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: both last-frame rules leave identical frame totals.
    #[test]
    fn prop_last_frame_rules_agree(rolls in game_strategy()) {
        let (three_ball, a) = play(LastFrameRule::ThreeBall, &rolls);
        let (bonus_frames, b) = play(LastFrameRule::BonusFrames, &rolls);
        prop_assert_eq!(a, b);
        prop_assert_eq!(
            three_ball.scorecard().frame_scores(),
            bonus_frames.scorecard().frame_scores()
        );
    }

    /// Property: the printed running totals end at the score.
    #[test]
    fn prop_frame_scores_end_at_score(rolls in game_strategy()) {
        let (player, _) = play(LastFrameRule::ThreeBall, &rolls);
        let totals = player.scorecard().frame_scores();
        prop_assert_eq!(totals.len(), 10);
        prop_assert_eq!(totals.last().copied(), Some(player.score()));
        prop_assert_eq!(player.score(), player.score());
    }

    /// Property: random lanes always produce a legal, finished game.
    #[test]
    fn prop_random_games_finish(seed in any::<u64>(), rule in prop_oneof![
        Just(LastFrameRule::ThreeBall),
        Just(LastFrameRule::BonusFrames),
    ]) {
        let mut game = Game::new(GameConfig::new().with_seed(seed).with_last_frame_rule(rule));
        game.add_player("The Dude").unwrap();
        game.add_player("Donny").unwrap();
        game.start().unwrap();
        game.play_out().unwrap();

        for player in game.players() {
            prop_assert!(player.is_done());
            prop_assert!(player.score() <= 300);
        }
    }
}
