use chess_rules::game::Game;
use chess_rules::perft::perft;
use chess_rules::square::Square;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Without draw rules a random game can run forever.
const MAX_PLAYOUT_PLIES: usize = 300;

/// Play ~20 random moves on a fresh game to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> Game {
    let mut game = Game::standard();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let moves = game.all_legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        let _ = game.make_move(mv);
    }
    game
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_all_legal_moves(c: &mut Criterion) {
    let game = setup_midgame();
    c.bench_function("all_legal_moves", |b| {
        b.iter(|| black_box(game.all_legal_moves()))
    });
}

fn bench_legal_moves_square(c: &mut Criterion) {
    let game = Game::standard();
    let knight = Square::new(7, 6);
    c.bench_function("legal_moves_square", |b| {
        b.iter(|| black_box(game.legal_moves(knight)))
    });
}

fn bench_apply(c: &mut Criterion) {
    let game = setup_midgame();
    let moves = game.all_legal_moves();
    let Some(mv) = moves.first().copied() else {
        return;
    };
    c.bench_function("apply", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                let _ = black_box(g.make_move(&mv));
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_apply_undo(c: &mut Criterion) {
    let game = setup_midgame();
    let moves = game.all_legal_moves();
    let Some(mv) = moves.first().copied() else {
        return;
    };
    c.bench_function("apply_undo", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                let _ = g.make_move(&mv);
                black_box(g.undo());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = Game::standard();
            let mut rng = StdRng::seed_from_u64(123);
            for _ in 0..MAX_PLAYOUT_PLIES {
                let moves = game.all_legal_moves();
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                let _ = game.make_move(mv);
            }
            black_box(game.status())
        })
    });
}

fn bench_perft_3(c: &mut Criterion) {
    c.bench_function("perft_3", |b| {
        b.iter_batched(
            Game::standard,
            |mut g| black_box(perft(&mut g, 3)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10_000);
    targets =
        bench_all_legal_moves,
        bench_legal_moves_square,
        bench_apply,
        bench_apply_undo,
);
criterion_group!(
    name = playouts;
    config = Criterion::default().sample_size(100);
    targets =
        bench_random_playout,
        bench_perft_3,
);
criterion_main!(benches, playouts);
