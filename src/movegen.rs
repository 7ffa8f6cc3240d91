//! Pseudo-legal move generation.
//!
//! Two entry points share the jump and ray walkers: [`pseudo_moves`], which
//! may include castling, and [`attack_targets`], the probe used by the attack
//! oracle. Castling needs attack data and attack data needs king moves, so the
//! probe never generates castling.

use arrayvec::ArrayVec;

use crate::attacks::{is_attacked, is_in_check};
use crate::color::Color;
use crate::pieces::{Piece, PieceType};
use crate::position::Position;
use crate::r#move::{MAX_MOVES_PER_SQUARE, Move, MoveFlags, MoveKind, MoveList};
use crate::square::Square;

pub type SquareList = ArrayVec<Square, MAX_MOVES_PER_SQUARE>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Moves for the piece on `from`, ignoring whether the mover's king is left
/// in check. Empty if `from` is empty.
pub fn pseudo_moves(position: &Position, from: Square, include_castling: bool) -> MoveList {
    let mut moves = MoveList::new();

    let Some(piece) = position.board().get(from) else {
        return moves;
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_moves(position, from, &piece, &mut moves),
        PieceType::Knight => jumps(position, from, &piece, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => slides(position, from, &piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceType::Rook => slides(position, from, &piece, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Queen => {
            slides(position, from, &piece, &ROOK_DIRECTIONS, &mut moves);
            slides(position, from, &piece, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceType::King => {
            jumps(position, from, &piece, &KING_OFFSETS, &mut moves);
            if include_castling {
                castling_moves(position, from, &piece, &mut moves);
            }
        }
    }

    moves
}

/// Squares the piece on `from` attacks.
///
/// Pawns attack their two forward diagonals whether or not anything stands
/// there; every other piece attacks the destinations of its castling-free
/// pseudo-moves.
pub fn attack_targets(position: &Position, from: Square) -> SquareList {
    let mut targets = SquareList::new();

    let Some(piece) = position.board().get(from) else {
        return targets;
    };

    if piece.piece_type == PieceType::Pawn {
        let dir = piece.color.pawn_direction();
        targets.extend([-1, 1].into_iter().filter_map(|dc| from.offset(dir, dc)));
    } else {
        targets.extend(pseudo_moves(position, from, false).iter().map(|mv| mv.to));
    }

    targets
}

fn pawn_moves(position: &Position, from: Square, piece: &Piece, moves: &mut MoveList) {
    let board = position.board();
    let color = piece.color;
    let dir = color.pawn_direction();

    let promotion = |to: Square| {
        if to.row == color.promotion_row() {
            MoveFlags::PROMOTION
        } else {
            MoveFlags::empty()
        }
    };

    // Pushes
    if let Some(one) = from.offset(dir, 0).filter(|sq| board.is_empty(*sq)) {
        moves.push(Move::new(from, one, MoveKind::Normal).with_flags(promotion(one)));

        if from.row == color.pawn_start_row() {
            if let Some(two) = from.offset(2 * dir, 0).filter(|sq| board.is_empty(*sq)) {
                moves.push(Move::new(from, two, MoveKind::DoubleStep));
            }
        }
    }

    // Captures
    for dc in [-1, 1] {
        let Some(target) = from.offset(dir, dc) else {
            continue;
        };

        match board.get(target) {
            Some(victim) if victim.color != color => {
                moves.push(
                    Move::new(from, target, MoveKind::Normal)
                        .with_flags(MoveFlags::CAPTURE | promotion(target)),
                );
            }
            None if position.en_passant_target() == Some(target) => {
                let mv =
                    Move::new(from, target, MoveKind::EnPassant).with_flags(MoveFlags::CAPTURE);
                let victim = board.get(Position::en_passant_victim(&mv));
                if victim.is_some_and(|v| v.is(PieceType::Pawn, color.opposite())) {
                    moves.push(mv);
                }
            }
            _ => {}
        }
    }
}

fn jumps(
    position: &Position,
    from: Square,
    piece: &Piece,
    offsets: &[(i32, i32)],
    moves: &mut MoveList,
) {
    for (d_row, d_col) in offsets {
        let Some(to) = from.offset(*d_row, *d_col) else {
            continue;
        };

        match position.board().get(to) {
            Some(target) if target.color == piece.color => {}
            Some(_) => {
                moves.push(Move::new(from, to, MoveKind::Normal).with_flags(MoveFlags::CAPTURE))
            }
            None => moves.push(Move::new(from, to, MoveKind::Normal)),
        }
    }
}

fn slides(
    position: &Position,
    from: Square,
    piece: &Piece,
    directions: &[(i32, i32)],
    moves: &mut MoveList,
) {
    for (d_row, d_col) in directions {
        let mut current = from;

        while let Some(to) = current.offset(*d_row, *d_col) {
            match position.board().get(to) {
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(
                            Move::new(from, to, MoveKind::Normal).with_flags(MoveFlags::CAPTURE),
                        );
                    }
                    break;
                }
                None => moves.push(Move::new(from, to, MoveKind::Normal)),
            }
            current = to;
        }
    }
}

fn castling_moves(position: &Position, from: Square, king: &Piece, moves: &mut MoveList) {
    let color = king.color;
    let row = color.back_row();

    if king.has_moved || from != Square::new(row, 4) || is_in_check(position, color) {
        return;
    }

    let opponent = color.opposite();
    let board = position.board();
    let unmoved_rook = |col: usize| {
        board
            .get(Square::new(row, col))
            .is_some_and(|rook| rook.is(PieceType::Rook, color) && !rook.has_moved)
    };
    let empty = |cols: &[usize]| cols.iter().all(|col| board.is_empty(Square::new(row, *col)));
    let safe = |cols: &[usize]| {
        cols.iter()
            .all(|col| !is_attacked(position, Square::new(row, *col), opponent))
    };

    if unmoved_rook(7) && empty(&[5, 6]) && safe(&[5, 6]) {
        moves.push(Move::new(from, Square::new(row, 6), MoveKind::CastleKingside));
    }

    if unmoved_rook(0) && empty(&[1, 2, 3]) && safe(&[2, 3]) {
        moves.push(Move::new(from, Square::new(row, 2), MoveKind::CastleQueenside));
    }
}

/// Starting squares of every piece `color` has on the board.
pub fn piece_squares(position: &Position, color: Color) -> impl Iterator<Item = Square> + '_ {
    position.board().pieces(color).map(|(square, _)| square)
}
