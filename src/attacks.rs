use crate::color::Color;
use crate::movegen::{attack_targets, piece_squares};
use crate::position::Position;
use crate::square::Square;

/// Whether any piece of `by_color` attacks `square`.
pub fn is_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    piece_squares(position, by_color).any(|from| attack_targets(position, from).contains(&square))
}

/// Whether `color`'s king is attacked. A board without that king is never in
/// check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .board()
        .find_king(color)
        .is_some_and(|king| is_attacked(position, king, color.opposite()))
}
