use crate::color::Color;

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Color::White => "White",
            Color::Black => "Black",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Letter used for this piece in move notation. Pawns have none.
    pub fn initial(&self) -> Option<char> {
        match self {
            PieceType::Pawn => None,
            PieceType::Knight => Some('N'),
            PieceType::Bishop => Some('B'),
            PieceType::Rook => Some('R'),
            PieceType::Queen => Some('Q'),
            PieceType::King => Some('K'),
        }
    }
}

/// A piece as it sits on the board.
///
/// `has_moved` only gates castling and the pawn double step. It is set when
/// the piece is relocated and reset only by undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece {
            piece_type,
            color,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    pub fn is(&self, piece_type: PieceType, color: Color) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };

        Some(Piece::new(piece_type, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_piece_creation() {
        let piece = Piece::new(PieceType::King, Color::White);
        assert_eq!(piece.piece_type, PieceType::King);
        assert_eq!(piece.color, Color::White);
        assert!(!piece.has_moved);
        assert!(piece.moved().has_moved);
    }

    #[rstest]
    #[case('K', PieceType::King, Color::White)]
    #[case('k', PieceType::King, Color::Black)]
    #[case('Q', PieceType::Queen, Color::White)]
    #[case('r', PieceType::Rook, Color::Black)]
    #[case('B', PieceType::Bishop, Color::White)]
    #[case('n', PieceType::Knight, Color::Black)]
    #[case('P', PieceType::Pawn, Color::White)]
    #[case('p', PieceType::Pawn, Color::Black)]
    fn test_piece_chars(#[case] c: char, #[case] piece_type: PieceType, #[case] color: Color) {
        let piece = Piece::new(piece_type, color);
        assert_eq!(piece.to_char(), c);
        assert_eq!(Piece::from_char(c), Some(piece));
    }

    #[test]
    fn test_piece_from_invalid_char() {
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_notation_initials() {
        assert_eq!(PieceType::Pawn.initial(), None);
        assert_eq!(PieceType::Knight.initial(), Some('N'));
        assert_eq!(PieceType::King.initial(), Some('K'));
    }
}
