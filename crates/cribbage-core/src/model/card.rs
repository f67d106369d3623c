use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use thiserror::Error;

/// Highest running sum a stack may reach during play.
pub const PLAY_LIMIT: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("{0} is not a valid card value")]
    InvalidValue(u8),
    #[error("{0} is not a valid suit index")]
    InvalidSuit(u8),
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from the wire representation: a value in 1..=13 and a
    /// suit index in 0..=3.
    pub fn from_parts(value: u8, suit: u8) -> Result<Self, CardError> {
        let rank = Rank::from_value(value).ok_or(CardError::InvalidValue(value))?;
        let suit = Suit::from_index(suit).ok_or(CardError::InvalidSuit(suit))?;
        Ok(Self { rank, suit })
    }

    pub const fn scoring_value(self) -> u32 {
        self.rank.scoring_value()
    }

    pub const fn is_playable(self, running_sum: u32) -> bool {
        running_sum + self.scoring_value() <= PLAY_LIMIT
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
