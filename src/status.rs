use crate::attacks::is_in_check;
use crate::color::Color;
use crate::legality::has_any_legal_move;
use crate::position::Position;
use std::fmt;

/// Status of the side to move.
///
/// `Checkmate` and `Stalemate` are terminal: no further move is accepted and
/// only undo leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn evaluate(position: &Position, side_to_move: Color) -> GameStatus {
        let in_check = is_in_check(position, side_to_move);
        let can_move = has_any_legal_move(position, side_to_move);

        match (in_check, can_move) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::InProgress,
            (false, false) => GameStatus::Stalemate,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Winning side, given the side that is to move in this status.
    pub fn winner(&self, side_to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(side_to_move.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", s)
    }
}
