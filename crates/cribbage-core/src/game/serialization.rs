use super::state::Game;
use crate::game::phase::GamePhase;
use crate::model::player::PlayerSide;
use serde::{Deserialize, Serialize};
use std::array;

/// The complete read surface a transport adapter may serialize to a client.
/// Per-side arrays are indexed by `PlayerSide`, hands as `(value, suit)`
/// pairs. Outbound only; restoring a game from a snapshot is not supported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub hands: [Vec<(u8, u8)>; 2],
    pub points: [u32; 2],
    pub won: [bool; 2],
    pub has_legal_cards: [bool; 2],
    pub running_sum: u32,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        GameSnapshot {
            phase: game.phase(),
            hands: array::from_fn(|i| game.player(PlayerSide::BOTH[i]).hand().as_pairs()),
            points: array::from_fn(|i| game.board().score(PlayerSide::BOTH[i])),
            won: array::from_fn(|i| game.board().has_won(PlayerSide::BOTH[i])),
            has_legal_cards: array::from_fn(|i| game.side_has_legal_card(PlayerSide::BOTH[i])),
            running_sum: game.running_sum(),
        }
    }

    pub fn to_json(game: &Game) -> serde_json::Result<String> {
        let snapshot = Self::capture(game);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
