use crate::error::ChessError;
use crate::square::Square;
use arrayvec::ArrayVec;
use bitflags::bitflags;

/// Upper bound on pseudo-moves from one square; a centralised queen has 27.
pub const MAX_MOVES_PER_SQUARE: usize = 32;

pub type MoveList = ArrayVec<Move, MAX_MOVES_PER_SQUARE>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoubleStep,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

impl MoveKind {
    pub fn is_castle(&self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b00000001;
        const PROMOTION = 0b00000010;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub flags: MoveFlags,
}

impl Move {
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            flags: MoveFlags::empty(),
        }
    }

    pub fn with_flags(self, flags: MoveFlags) -> Self {
        Move {
            flags: self.flags | flags,
            ..self
        }
    }

    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    pub fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    /// Splits a LAN string such as `e2e4` or `e7e8q` into its squares.
    /// A trailing promotion letter is accepted only as `q`, since pawns always
    /// promote to a queen.
    pub fn squares_from_lan(lan: &str) -> Result<(Square, Square), ChessError> {
        if !lan.is_ascii() || !(4..=5).contains(&lan.len()) {
            return Err(ChessError::InvalidLan(lan.to_string()));
        }

        let from = Square::from_algebraic(&lan[0..2])
            .map_err(|_| ChessError::InvalidLan(lan.to_string()))?;
        let to = Square::from_algebraic(&lan[2..4])
            .map_err(|_| ChessError::InvalidLan(lan.to_string()))?;

        match &lan[4..] {
            "" | "q" => Ok((from, to)),
            _ => Err(ChessError::InvalidLan(lan.to_string())),
        }
    }

    pub fn to_lan(&self) -> String {
        let mut lan = format!("{}{}", self.from, self.to);
        if self.is_promotion() {
            lan.push('q');
        }
        lan
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lan())
    }
}
