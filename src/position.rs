use crate::board::Board;
use crate::pieces::PieceType;
use crate::r#move::{Move, MoveKind};
use crate::record::{Capture, RookShift, Undo};
use crate::square::Square;

/// Board contents plus the en passant target left by the last double step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    en_passant_target: Option<Square>,
}

impl Position {
    pub fn new(board: Board, en_passant_target: Option<Square>) -> Self {
        Position {
            board,
            en_passant_target,
        }
    }

    pub fn standard() -> Self {
        Position::new(Board::standard(), None)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Square of the pawn an en passant move removes: beside the mover, not
    /// on the destination.
    pub fn en_passant_victim(mv: &Move) -> Square {
        Square::new(mv.from.row, mv.to.col)
    }

    /// Rook source and destination squares for a castling move.
    pub fn castling_rook_squares(mv: &Move) -> Option<(Square, Square)> {
        let row = mv.from.row;
        match mv.kind {
            MoveKind::CastleKingside => Some((Square::new(row, 7), Square::new(row, 5))),
            MoveKind::CastleQueenside => Some((Square::new(row, 0), Square::new(row, 3))),
            _ => None,
        }
    }

    /// Performs `mv` without checking legality and returns what is needed to
    /// revert it. `None` (and no change) if `from` is empty.
    ///
    /// The caller guarantees `mv` is pseudo-legal for this position. The same
    /// mutation serves move application and the self-check simulation.
    pub fn play(&mut self, mv: &Move) -> Option<Undo> {
        let piece = self.board.get(mv.from)?;

        let captured_square = match mv.kind {
            MoveKind::EnPassant => Self::en_passant_victim(mv),
            _ => mv.to,
        };
        let captured = self
            .board
            .get(captured_square)
            .map(|piece| Capture {
                piece,
                square: captured_square,
            });
        let rook = Self::castling_rook_squares(mv).and_then(|(from, to)| {
            self.board
                .get(from)
                .map(|rook| RookShift { rook, from, to })
        });
        let prior_en_passant = self.en_passant_target;

        self.en_passant_target = match mv.kind {
            MoveKind::DoubleStep => mv.from.offset(piece.color.pawn_direction(), 0),
            _ => None,
        };

        if mv.kind == MoveKind::EnPassant {
            self.board.set(captured_square, None);
        }

        if let Some(shift) = rook {
            self.board.set(shift.from, None);
            self.board.set(shift.to, Some(shift.rook.moved()));
        }

        let mut moved = piece.moved();
        let promoted =
            piece.piece_type == PieceType::Pawn && mv.to.row == piece.color.promotion_row();
        if promoted {
            moved.piece_type = PieceType::Queen;
        }
        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(moved));

        Some(Undo {
            mv: *mv,
            piece,
            captured,
            rook,
            prior_en_passant,
            promoted,
        })
    }

    /// Exactly inverts the `play` call that produced `undo`.
    pub fn unplay(&mut self, undo: &Undo) {
        let mv = undo.mv;

        self.board.set(mv.to, None);
        self.board.set(mv.from, Some(undo.piece));

        if let Some(captured) = undo.captured {
            self.board.set(captured.square, Some(captured.piece));
        }

        if let Some(shift) = undo.rook {
            self.board.set(shift.to, None);
            self.board.set(shift.from, Some(shift.rook));
        }

        self.en_passant_target = undo.prior_en_passant;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}
