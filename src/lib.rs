pub mod attacks;
pub mod board;
pub mod color;
pub mod error;
pub mod game;
pub mod legality;
pub mod r#move;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod pieces;
pub mod position;
pub mod record;
pub mod square;
pub mod status;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use error::ChessError;
pub use game::Game;
pub use status::GameStatus;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn chess_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use color::Color;
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyPiece>()?;
    m.add("WHITE", Color::White as i8)?;
    m.add("BLACK", Color::Black as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::color::Color;
    use crate::error::ChessError;
    use crate::game::Game;
    use crate::pieces::{Piece, PieceType};
    use crate::r#move::Move;
    use crate::square::Square;

    fn value_error(e: ChessError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    }

    fn parse_square(name: &str) -> PyResult<Square> {
        Square::from_algebraic(name).map_err(value_error)
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (fen=None))]
        pub fn new(fen: Option<&str>) -> PyResult<Self> {
            let game = match fen {
                Some(fen) => Game::from_fen(fen).map_err(value_error)?,
                None => Game::standard(),
            };
            Ok(PyGame { game })
        }

        #[staticmethod]
        pub fn standard() -> Self {
            PyGame {
                game: Game::standard(),
            }
        }

        // ---------------------------------------------------------------------
        // Game Methods
        // ---------------------------------------------------------------------

        pub fn turn(&self) -> i8 {
            self.game.side_to_move() as i8
        }

        pub fn turn_number(&self) -> u32 {
            self.game.turn_number()
        }

        pub fn status(&self) -> String {
            self.game.status().to_string()
        }

        /// Legal moves of the piece on `square`, named like `"e2"`
        pub fn legal_moves(&self, square: &str) -> PyResult<Vec<PyMove>> {
            let from = parse_square(square)?;
            Ok(self
                .game
                .legal_moves(from)
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect())
        }

        pub fn all_legal_moves(&self) -> Vec<PyMove> {
            self.game
                .all_legal_moves()
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn apply(&mut self, from: &str, to: &str) -> PyResult<String> {
            let from = parse_square(from)?;
            let to = parse_square(to)?;
            self.game
                .apply(from, to)
                .map(|status| status.to_string())
                .map_err(value_error)
        }

        pub fn apply_lan(&mut self, lan: &str) -> PyResult<String> {
            self.game
                .apply_lan(lan)
                .map(|status| status.to_string())
                .map_err(value_error)
        }

        pub fn make_move(&mut self, move_: PyMove) -> PyResult<String> {
            self.game
                .make_move(&move_.move_)
                .map(|status| status.to_string())
                .map_err(value_error)
        }

        pub fn undo(&mut self) -> bool {
            self.game.undo()
        }

        pub fn reset(&mut self) {
            self.game.reset();
        }

        pub fn is_check(&self) -> bool {
            self.game.is_check()
        }

        pub fn is_checkmate(&self) -> bool {
            self.game.is_checkmate()
        }

        pub fn is_stalemate(&self) -> bool {
            self.game.is_stalemate()
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn winner(&self) -> Option<i8> {
            self.game.winner().map(|color| color as i8)
        }

        pub fn get_piece(&self, square: &str) -> PyResult<Option<PyPiece>> {
            let sq = parse_square(square)?;
            Ok(self.game.piece_at(sq).map(|piece| PyPiece { piece }))
        }

        pub fn en_passant_square(&self) -> Option<String> {
            self.game.en_passant_target().map(|sq| sq.to_algebraic())
        }

        pub fn history(&self) -> Vec<String> {
            self.game
                .history()
                .iter()
                .map(|record| record.to_algebraic())
                .collect()
        }

        pub fn movetext(&self) -> String {
            self.game.movetext()
        }

        pub fn to_fen(&self) -> String {
            self.game.to_fen()
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        // ---------------------------------------------------------------------
        // Dunder Methods
        // ---------------------------------------------------------------------

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={}, to_move={}, status={})",
                self.game.turn_number(),
                self.game.side_to_move(),
                self.game.status(),
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        pub fn src_square(&self) -> String {
            self.move_.from.to_algebraic()
        }

        pub fn dst_square(&self) -> String {
            self.move_.to.to_algebraic()
        }

        pub fn kind(&self) -> String {
            format!("{:?}", self.move_.kind)
        }

        pub fn is_capture(&self) -> bool {
            self.move_.is_capture()
        }

        pub fn is_promotion(&self) -> bool {
            self.move_.is_promotion()
        }

        pub fn to_lan(&self) -> String {
            self.move_.to_lan()
        }

        pub fn __str__(&self) -> String {
            self.move_.to_lan()
        }

        pub fn __repr__(&self) -> String {
            format!("Move({})", self.move_.to_lan())
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }

    #[pyclass(name = "Piece")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyPiece {
        piece: Piece,
    }

    #[pymethods]
    impl PyPiece {
        #[new]
        pub fn new(piece_type: &str, color: i8) -> PyResult<Self> {
            let pt = match piece_type.to_lowercase().as_str() {
                "p" | "pawn" => PieceType::Pawn,
                "n" | "knight" => PieceType::Knight,
                "b" | "bishop" => PieceType::Bishop,
                "r" | "rook" => PieceType::Rook,
                "q" | "queen" => PieceType::Queen,
                "k" | "king" => PieceType::King,
                _ => {
                    return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                        "Invalid piece type",
                    ));
                }
            };

            let c = Color::from_int(color).ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid color: must be 1 (White) or -1 (Black), got {}",
                    color
                ))
            })?;

            Ok(PyPiece {
                piece: Piece::new(pt, c),
            })
        }

        pub fn piece_type(&self) -> String {
            format!("{:?}", self.piece.piece_type).to_lowercase()
        }

        pub fn color(&self) -> i8 {
            self.piece.color as i8
        }

        pub fn has_moved(&self) -> bool {
            self.piece.has_moved
        }

        pub fn symbol(&self) -> String {
            self.piece.to_char().to_string()
        }

        pub fn __str__(&self) -> String {
            self.piece.to_char().to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Piece({:?}, {:?})", self.piece.piece_type, self.piece.color)
        }
    }
} // end python_bindings module
