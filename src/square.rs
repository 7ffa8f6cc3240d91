use crate::error::ChessError;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 8;

/// A board coordinate. Row 0 is rank 8 (black's back rank), column 0 is
/// file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The square `(d_row, d_col)` away, if it is still on the board.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Square> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn file(&self) -> char {
        (b'a' + self.col as u8) as char
    }

    pub fn rank(&self) -> usize {
        BOARD_SIZE - self.row
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub fn from_algebraic(s: &str) -> Result<Self, ChessError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidSquare(s.to_string()));
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }

        let col = (file as u8 - b'a') as usize;
        let rank = (rank as u8 - b'0') as usize;
        Ok(Square::new(BOARD_SIZE - rank, col))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
