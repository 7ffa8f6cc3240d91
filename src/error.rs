use crate::square::Square;
use crate::status::GameStatus;

/// Errors reported by the rules engine.
///
/// Every failure is recoverable: an operation that returns an error leaves
/// the game exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The requested move is not among the legal moves of its source square
    #[error("Illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// The game already ended in checkmate or stalemate
    #[error("Game is over: {0}")]
    GameOver(GameStatus),

    /// Undo requested with an empty move history
    #[error("No move to undo")]
    NoHistory,

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid LAN move: {0}")]
    InvalidLan(String),
}
