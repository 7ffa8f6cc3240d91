//! Move-path enumeration for checking the generator against known counts.

use crate::game::Game;
use crate::r#move::Move;

/// Number of legal move sequences of length `depth` from the current state.
///
/// Walks the tree with `make_move`/`undo_move`, so the game is left as it
/// was found.
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        if game.make_move(mv).is_ok() {
            nodes += perft(game, depth - 1);
            game.undo();
        }
    }
    nodes
}

/// Per-root-move breakdown of `perft(game, depth)`.
pub fn divide(game: &mut Game, depth: u32) -> Vec<(Move, u64)> {
    let mut results = Vec::new();
    if depth == 0 {
        return results;
    }

    for mv in game.all_legal_moves() {
        if game.make_move(&mv).is_ok() {
            results.push((mv, perft(game, depth - 1)));
            game.undo();
        }
    }
    results
}
