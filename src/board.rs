use crate::color::Color;
use crate::error::ChessError;
use crate::pieces::{Piece, PieceType};
use crate::square::{BOARD_SIZE, Square};
use std::fmt;

pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn standard() -> Self {
        Self::from_placement(STANDARD_PLACEMENT).expect("Failed to create standard board")
    }

    /// Parses the piece-placement field of a FEN string. The first rank
    /// group becomes row 0. Every piece loads with `has_moved == false`.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen(format!(
                "expected {} ranks, got {}",
                BOARD_SIZE,
                ranks.len()
            )));
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;

            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    if col >= BOARD_SIZE {
                        return Err(ChessError::InvalidFen(format!(
                            "rank {} overflows the board",
                            BOARD_SIZE - row
                        )));
                    }
                    board.cells[row][col] = Some(piece);
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen(format!("invalid character: {}", c)));
                }
            }

            if col != BOARD_SIZE {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has wrong number of squares",
                    BOARD_SIZE - row
                )));
            }
        }

        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut fen = String::new();

        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_count = 0;

            for cell in cells {
                if let Some(piece) = cell {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if row + 1 < BOARD_SIZE {
                fen.push('/');
            }
        }

        fen
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.is_valid() {
            self.cells[square.row][square.col]
        } else {
            None
        }
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_valid() {
            self.cells[square.row][square.col] = piece;
        }
    }

    /// Removes and returns the piece on `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        if square.is_valid() {
            self.cells[square.row][square.col].take()
        } else {
            None
        }
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn clear(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// All pieces of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| (Square::new(row, col), piece)))
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(square, _)| square)
    }

    pub fn count(&self, piece_type: PieceType, color: Color) -> usize {
        self.pieces(color)
            .filter(|(_, piece)| piece.piece_type == piece_type)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}
