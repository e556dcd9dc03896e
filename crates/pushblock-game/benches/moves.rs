//! Benchmarks for the movement engine.
//!
//! Measures `Game::apply_move` over a fixed command sequence that mixes plain steps, pushes,
//! and blocked moves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench moves
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pushblock_core::{Direction, Level};
use pushblock_game::Game;

const WAREHOUSE: &str = "
    ############
    #..G.....G.#
    #.B..##.B..#
    #..#.P..#..#
    #.B..B..*..#
    #G.....#..G#
    ############
";

const PATTERN: [Direction; 12] = [
    Direction::Left,
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Right,
    Direction::Up,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
    Direction::Left,
];

fn bench_apply_move(c: &mut Criterion) {
    let level = Level::parse(WAREHOUSE).unwrap();

    c.bench_function("apply_move_pattern", |b| {
        b.iter_batched(
            || Game::new(level.clone()),
            |mut game| {
                for _ in 0..8 {
                    for dir in PATTERN {
                        hint::black_box(game.apply_move(dir));
                    }
                }
                game
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("parse_level", |b| {
        b.iter(|| Level::parse(hint::black_box(WAREHOUSE)).unwrap());
    });
}

criterion_group!(benches, bench_apply_move);
criterion_main!(benches);
