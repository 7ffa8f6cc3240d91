use crate::attacks::is_in_check;
use crate::color::Color;
use crate::movegen::{piece_squares, pseudo_moves};
use crate::position::Position;
use crate::r#move::{Move, MoveList};
use crate::square::Square;

/// Legal moves of the piece on `from`.
///
/// Empty when `from` is empty or holds a piece of the side not to move.
pub fn legal_moves(position: &Position, from: Square, side_to_move: Color) -> MoveList {
    let mut moves = MoveList::new();

    match position.board().get(from) {
        Some(piece) if piece.color == side_to_move => {}
        _ => return moves,
    }

    moves.extend(
        pseudo_moves(position, from, true)
            .into_iter()
            .filter(|mv| !leaves_king_in_check(position, mv, side_to_move)),
    );
    moves
}

/// Plays `mv` on a scratch copy and reports whether `color`'s king is then
/// attacked. Uses the same board mutation as move application, so en passant
/// removes the victim before the check test.
pub fn leaves_king_in_check(position: &Position, mv: &Move, color: Color) -> bool {
    let mut scratch = position.clone();
    scratch.play(mv);
    is_in_check(&scratch, color)
}

pub fn all_legal_moves(position: &Position, color: Color) -> Vec<Move> {
    piece_squares(position, color)
        .flat_map(|from| legal_moves(position, from, color))
        .collect()
}

pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    piece_squares(position, color).any(|from| !legal_moves(position, from, color).is_empty())
}
