//! Benchmarks for scorecard and game throughput
//!
//! Run with: cargo bench --bench scoring

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_bowling::{Game, GameConfig, LastFrameRule, Player, PlayerId, ScriptedRolls};

fn full_game(rule: LastFrameRule, rolls: &[u8]) -> u32 {
    let config = GameConfig::new().with_last_frame_rule(rule);
    let mut player = Player::new(
        PlayerId::from_name("Walter", 0),
        "Walter",
        &config,
        Box::new(ScriptedRolls::new(rolls.to_vec())),
    );
    for _ in 0..10 {
        player.take_next_turn().unwrap();
    }
    player.score()
}

fn bench_single_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single game");

    let games: [(&str, Vec<u8>); 3] = [
        ("perfect", vec![10; 12]),
        ("spares", vec![5; 21]),
        ("mixed", vec![10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]),
    ];

    for rule in [LastFrameRule::ThreeBall, LastFrameRule::BonusFrames] {
        for (name, rolls) in &games {
            group.bench_with_input(
                BenchmarkId::new(format!("{rule:?}"), name),
                rolls,
                |b, rolls| b.iter(|| full_game(rule, black_box(rolls))),
            );
        }
    }

    group.finish();
}

fn bench_random_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random field");

    for players in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("play_out", players), &players, |b, &n| {
            b.iter(|| {
                let mut game = Game::new(GameConfig::new().with_seed(black_box(7)));
                for seat in 0..n {
                    game.add_player(&format!("Bowler {seat}")).unwrap();
                }
                game.start().unwrap();
                game.play_out().unwrap();
                game.winner().map(Player::score)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_game, bench_random_field);
criterion_main!(benches);
