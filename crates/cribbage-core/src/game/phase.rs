use core::fmt;
use serde::{Deserialize, Serialize};

/// The stages a round moves through, from first deal to a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Deal,
    Play,
    Show,
    Over,
}

impl GamePhase {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "notstarted" => Some(GamePhase::NotStarted),
            "deal" => Some(GamePhase::Deal),
            "play" => Some(GamePhase::Play),
            "show" => Some(GamePhase::Show),
            "over" => Some(GamePhase::Over),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::NotStarted => "NotStarted",
            GamePhase::Deal => "Deal",
            GamePhase::Play => "Play",
            GamePhase::Show => "Show",
            GamePhase::Over => "Over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
