//! Short algebraic notation for applied moves.
//!
//! Check and mate suffixes are not rendered.

use crate::color::Color;
use crate::r#move::MoveKind;
use crate::record::MoveRecord;

pub fn to_algebraic(record: &MoveRecord) -> String {
    let mv = record.mv();

    match mv.kind {
        MoveKind::CastleKingside => return "O-O".to_string(),
        MoveKind::CastleQueenside => return "O-O-O".to_string(),
        _ => {}
    }

    let capture = if record.is_capture() { "x" } else { "" };

    match record.piece().piece_type.initial() {
        Some(initial) => format!("{}{}{}", initial, capture, mv.to),
        None => {
            let mut san = if record.is_capture() {
                format!("{}x{}", mv.from.file(), mv.to)
            } else {
                mv.to.to_string()
            };
            if record.promoted() {
                san.push_str("=Q");
            }
            san
        }
    }
}

/// Numbered move list, e.g. `1. e4 e5 2. Nf3`. A history that starts with
/// black to move opens with `1... e5`.
pub fn movetext(records: &[MoveRecord]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(records.len() * 2);

    for (i, record) in records.iter().enumerate() {
        let san = record.to_algebraic();
        match record.side {
            Color::White => {
                parts.push(format!("{}.", record.turn_number));
                parts.push(san);
            }
            Color::Black => {
                let follows_white = i > 0 && records[i - 1].side == Color::White;
                if !follows_white {
                    parts.push(format!("{}...", record.turn_number));
                }
                parts.push(san);
            }
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use rstest::rstest;

    fn last_san(fen: &str, lan: &str) -> String {
        let mut game = Game::from_fen(fen).expect("valid FEN");
        game.apply_lan(lan).expect("legal move");
        game.last_move().expect("move recorded").to_algebraic()
    }

    #[rstest]
    #[case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "e2e4", "e4")]
    #[case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "g1f3", "Nf3")]
    #[case("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5", "exd5")]
    #[case("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1", "d1d5", "Qxd5")]
    #[case("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5d6", "exd6")]
    #[case("4k2r/8/8/8/8/8/8/R3K3 w Qk - 0 1", "e1c1", "O-O-O")]
    #[case("4k2r/8/8/8/8/8/8/R3K3 b Qk - 0 1", "e8g8", "O-O")]
    #[case("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1", "b7b8q", "b8=Q")]
    #[case("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1", "b7a8", "bxa8=Q")]
    fn test_to_algebraic(#[case] fen: &str, #[case] lan: &str, #[case] expected: &str) {
        assert_eq!(last_san(fen, lan), expected);
    }

    #[test]
    fn test_knight_and_king_letters_differ() {
        // Both pieces can reach f3 from here
        let fen = "4k3/8/8/8/8/8/4K3/6N1 w - - 0 1";
        assert_eq!(last_san(fen, "g1f3"), "Nf3");
        assert_eq!(last_san(fen, "e2f3"), "Kf3");
    }

    #[test]
    fn test_movetext_from_start() {
        let mut game = Game::standard();
        for lan in ["e2e4", "e7e5", "g1f3"] {
            game.apply_lan(lan).expect("legal");
        }
        assert_eq!(game.movetext(), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn test_movetext_black_first() {
        let mut game = Game::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 9").expect("valid FEN");
        for lan in ["e7e5", "e2e4"] {
            game.apply_lan(lan).expect("legal");
        }
        assert_eq!(game.movetext(), "9... e5 10. e4");
    }

    #[test]
    fn test_movetext_empty() {
        assert_eq!(Game::standard().movetext(), "");
    }
}
