use crate::game::Game;
use crate::square::Square;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize Square as its algebraic name, e.g. `"e4"`
impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Square::from_algebraic(&name).map_err(serde::de::Error::custom)
    }
}

/// Wire form of a game: the starting FEN plus the moves played from it.
#[derive(Serialize, Deserialize)]
struct GameRecord {
    fen: String,
    moves: Vec<String>,
}

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GameRecord {
            fen: self.start_fen(),
            moves: self.history().iter().map(|r| r.mv().to_lan()).collect(),
        }
        .serialize(serializer)
    }
}

/// Deserialize by replaying every move, so a record with an illegal move is
/// rejected.
impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = GameRecord::deserialize(deserializer)?;
        let mut game = Game::from_fen(&record.fen).map_err(serde::de::Error::custom)?;
        for lan in &record.moves {
            game.apply_lan(lan).map_err(serde::de::Error::custom)?;
        }
        Ok(game)
    }
}
