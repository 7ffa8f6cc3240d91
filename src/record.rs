use crate::color::Color;
use crate::notation;
use crate::pieces::Piece;
use crate::r#move::Move;
use crate::square::Square;
use crate::status::GameStatus;

/// A piece removed from the board by a move, with the square it stood on.
/// For en passant the square differs from the move's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capture {
    pub piece: Piece,
    pub square: Square,
}

/// The rook relocated by a castling move, as it was before moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RookShift {
    pub rook: Piece,
    pub from: Square,
    pub to: Square,
}

/// Everything a move changed on the position, captured before mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Undo {
    pub mv: Move,
    /// The moving piece before the move: original kind and `has_moved` flag.
    pub piece: Piece,
    pub captured: Option<Capture>,
    pub rook: Option<RookShift>,
    pub prior_en_passant: Option<Square>,
    pub promoted: bool,
}

/// One entry of the game history.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub undo: Undo,
    pub side: Color,
    pub turn_number: u32,
    pub prior_status: GameStatus,
}

impl MoveRecord {
    pub fn mv(&self) -> Move {
        self.undo.mv
    }

    pub fn piece(&self) -> Piece {
        self.undo.piece
    }

    pub fn captured(&self) -> Option<Capture> {
        self.undo.captured
    }

    pub fn is_capture(&self) -> bool {
        self.undo.captured.is_some()
    }

    pub fn promoted(&self) -> bool {
        self.undo.promoted
    }

    pub fn to_algebraic(&self) -> String {
        notation::to_algebraic(self)
    }
}
