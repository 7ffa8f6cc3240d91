use crate::board::Board;
use crate::color::Color;
use crate::error::ChessError;
use crate::legality::{all_legal_moves, legal_moves};
use crate::notation;
use crate::pieces::{Piece, PieceType};
use crate::position::Position;
use crate::r#move::{Move, MoveList};
use crate::record::MoveRecord;
use crate::square::Square;
use crate::status::GameStatus;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// State a game was created from, kept for `reset` and serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Start {
    position: Position,
    side_to_move: Color,
    turn_number: u32,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    side_to_move: Color,
    turn_number: u32,
    history: Vec<MoveRecord>,
    status: GameStatus,
    start: Start,
}

impl Game {
    pub fn standard() -> Self {
        Self::from_parts(Position::standard(), Color::White, 1)
    }

    fn from_parts(position: Position, side_to_move: Color, turn_number: u32) -> Self {
        let status = GameStatus::evaluate(&position, side_to_move);
        Game {
            start: Start {
                position: position.clone(),
                side_to_move,
                turn_number,
            },
            position,
            side_to_move,
            turn_number,
            history: Vec::new(),
            status,
        }
    }

    /// Loads a six-field FEN string.
    ///
    /// `has_moved` flags are inferred: kings and corner rooks are unmoved
    /// only when the castling field grants the matching right, pawns are
    /// unmoved only on their start row. The halfmove clock is validated and
    /// otherwise ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(ChessError::InvalidFen(format!(
                "expected 6 fields, got {}",
                parts.len()
            )));
        }

        let mut board = Board::from_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ChessError::InvalidFen(format!("invalid side to move: {}", other))),
        };

        let castling = parts[2];
        if castling != "-" && !castling.chars().all(|c| "KQkq".contains(c)) {
            return Err(ChessError::InvalidFen(format!(
                "invalid castling rights: {}",
                castling
            )));
        }
        infer_has_moved(&mut board, castling);

        let en_passant_target = match parts[3] {
            "-" => None,
            square => Some(en_passant_field(&board, square, side_to_move)?),
        };

        parts[4].parse::<u32>().map_err(|_| {
            ChessError::InvalidFen(format!("invalid halfmove clock: {}", parts[4]))
        })?;

        let turn_number = parts[5]
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid fullmove number: {}", parts[5]))
            })?;

        for color in [Color::White, Color::Black] {
            let kings = board.count(PieceType::King, color);
            if kings != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "expected one {} king, found {}",
                    color, kings
                )));
            }
        }

        Ok(Self::from_parts(
            Position::new(board, en_passant_target),
            side_to_move,
            turn_number,
        ))
    }

    pub fn to_fen(&self) -> String {
        write_fen(&self.position, self.side_to_move, self.turn_number)
    }

    /// Returns to the state the game was created in.
    pub fn reset(&mut self) {
        let start = self.start.clone();
        *self = Self::from_parts(start.position, start.side_to_move, start.turn_number);
        log::debug!("game reset");
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().get(square)
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant_target()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Legal moves of the piece on `square`. Empty for an empty square or a
    /// piece of the side not to move.
    pub fn legal_moves(&self, square: Square) -> MoveList {
        legal_moves(&self.position, square, self.side_to_move)
    }

    pub fn all_legal_moves(&self) -> Vec<Move> {
        all_legal_moves(&self.position, self.side_to_move)
    }

    /// Applies `mv`, which must match one of `legal_moves(mv.from)` by
    /// destination and kind. On error nothing changes.
    pub fn make_move(&mut self, mv: &Move) -> Result<GameStatus, ChessError> {
        if self.status.is_terminal() {
            log::trace!("rejected {}: game is over ({})", mv, self.status);
            return Err(ChessError::GameOver(self.status));
        }

        let illegal = ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        };

        let Some(legal) = self
            .legal_moves(mv.from)
            .into_iter()
            .find(|m| m.to == mv.to && m.kind == mv.kind)
        else {
            log::trace!("rejected illegal move {}", mv);
            return Err(illegal);
        };

        let undo = self.position.play(&legal).ok_or(illegal)?;

        self.history.push(MoveRecord {
            undo,
            side: self.side_to_move,
            turn_number: self.turn_number,
            prior_status: self.status,
        });

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::White {
            self.turn_number += 1;
        }

        self.status = GameStatus::evaluate(&self.position, self.side_to_move);

        if let Some(record) = self.history.last() {
            log::debug!(
                "{} played {} ({}), status {}",
                record.side,
                record.to_algebraic(),
                legal,
                self.status
            );
        }
        if self.status.is_terminal() {
            log::info!("game over: {} with {} to move", self.status, self.side_to_move);
        }

        Ok(self.status)
    }

    /// Applies the legal move from `from` to `to`. `Ok` carries the status
    /// of the side now to move.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<GameStatus, ChessError> {
        if self.status.is_terminal() {
            log::trace!("rejected {}{}: game is over ({})", from, to, self.status);
            return Err(ChessError::GameOver(self.status));
        }

        let Some(mv) = self.legal_moves(from).into_iter().find(|mv| mv.to == to) else {
            log::trace!("rejected illegal move {}{}", from, to);
            return Err(ChessError::IllegalMove { from, to });
        };

        self.make_move(&mv)
    }

    /// `apply` for a LAN string such as `e2e4` or `e7e8q`.
    pub fn apply_lan(&mut self, lan: &str) -> Result<GameStatus, ChessError> {
        let (from, to) = Move::squares_from_lan(lan)?;
        self.apply(from, to)
    }

    /// Reverts the last applied move and returns its record.
    pub fn undo_move(&mut self) -> Result<MoveRecord, ChessError> {
        let record = self.history.pop().ok_or(ChessError::NoHistory)?;

        self.position.unplay(&record.undo);
        self.side_to_move = record.side;
        self.turn_number = record.turn_number;
        self.status = record.prior_status;

        log::debug!("undid {} by {}", record.to_algebraic(), record.side);

        Ok(record)
    }

    /// Returns: whether a move was undone
    pub fn undo(&mut self) -> bool {
        self.undo_move().is_ok()
    }

    pub fn is_check(&self) -> bool {
        matches!(self.status, GameStatus::Check | GameStatus::Checkmate)
    }

    pub fn is_checkmate(&self) -> bool {
        self.status == GameStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Color> {
        self.status.winner(self.side_to_move)
    }

    pub fn movetext(&self) -> String {
        notation::movetext(&self.history)
    }

    /// FEN of the position the game started from.
    pub fn start_fen(&self) -> String {
        write_fen(
            &self.start.position,
            self.start.side_to_move,
            self.start.turn_number,
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, to_move: {}, status: {})\n{}",
            self.turn_number,
            self.side_to_move,
            self.status,
            self.position.board()
        )
    }
}

fn write_fen(position: &Position, side_to_move: Color, turn_number: u32) -> String {
    let mut fen = position.board().to_placement();

    fen.push(' ');
    fen.push(match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_field(position.board()));

    fen.push(' ');
    match position.en_passant_target() {
        Some(target) => fen.push_str(&target.to_algebraic()),
        None => fen.push('-'),
    }

    fen.push_str(" 0 ");
    fen.push_str(&turn_number.to_string());

    fen
}

/// The en passant field must name the empty square an enemy pawn just
/// skipped: rank 6 with white to move, rank 3 with black to move.
fn en_passant_field(
    board: &Board,
    field: &str,
    side_to_move: Color,
) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidFen(format!("invalid en passant square: {}", field));

    let target = Square::from_algebraic(field).map_err(|_| invalid())?;
    let mover = side_to_move.opposite();

    // The square the double step landed on, one step past the target
    let landing = target.offset(mover.pawn_direction(), 0).ok_or_else(invalid)?;
    let skipped_row = mover.pawn_start_row() as i32 + mover.pawn_direction();

    let valid = target.row as i32 == skipped_row
        && board.is_empty(target)
        && board
            .get(landing)
            .is_some_and(|pawn| pawn.is(PieceType::Pawn, mover));

    if valid { Ok(target) } else { Err(invalid()) }
}

fn infer_has_moved(board: &mut Board, castling: &str) {
    let occupied: Vec<(Square, Piece)> = board.occupied().collect();

    for (square, piece) in occupied {
        let color = piece.color;
        let back_row = color.back_row();
        let (kingside, queenside) = match color {
            Color::White => (castling.contains('K'), castling.contains('Q')),
            Color::Black => (castling.contains('k'), castling.contains('q')),
        };

        let unmoved = match piece.piece_type {
            PieceType::Pawn => square.row == color.pawn_start_row(),
            PieceType::King => square == Square::new(back_row, 4) && (kingside || queenside),
            PieceType::Rook if square == Square::new(back_row, 7) => kingside,
            PieceType::Rook if square == Square::new(back_row, 0) => queenside,
            PieceType::Rook => false,
            _ => true,
        };

        if !unmoved {
            board.set(square, Some(piece.moved()));
        }
    }
}

fn castling_field(board: &Board) -> String {
    let mut field = String::new();

    for color in [Color::White, Color::Black] {
        let row = color.back_row();
        let unmoved = |col: usize, piece_type: PieceType| {
            board
                .get(Square::new(row, col))
                .is_some_and(|p| p.is(piece_type, color) && !p.has_moved)
        };

        if !unmoved(4, PieceType::King) {
            continue;
        }

        let (kingside, queenside) = match color {
            Color::White => ('K', 'Q'),
            Color::Black => ('k', 'q'),
        };
        if unmoved(7, PieceType::Rook) {
            field.push(kingside);
        }
        if unmoved(0, PieceType::Rook) {
            field.push(queenside);
        }
    }

    if field.is_empty() {
        field.push('-');
    }
    field
}
