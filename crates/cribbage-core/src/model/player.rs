use crate::model::hand::Hand;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerSide {
    A = 0,
    B = 1,
}

impl PlayerSide {
    pub const BOTH: [PlayerSide; 2] = [PlayerSide::A, PlayerSide::B];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerSide::A),
            1 => Some(PlayerSide::B),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn other(self) -> PlayerSide {
        match self {
            PlayerSide::A => PlayerSide::B,
            PlayerSide::B => PlayerSide::A,
        }
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerSide::A => "Player A",
            PlayerSide::B => "Player B",
        };
        f.write_str(label)
    }
}

/// One seat at the table: the cards still to be played and the crib set aside
/// for the dealer.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
    crib: Hand,
}

impl Player {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            crib: Hand::new(),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn crib(&self) -> &Hand {
        &self.crib
    }

    pub fn crib_mut(&mut self) -> &mut Hand {
        &mut self.crib
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn set_crib(&mut self, crib: Hand) {
        self.crib = crib;
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub fn clear_crib(&mut self) {
        self.crib.clear();
    }

    /// True when at least one held card can be played without pushing the
    /// running sum past the limit.
    pub fn has_legal_card(&self, running_sum: u32) -> bool {
        self.hand.iter().any(|card| card.is_playable(running_sum))
    }
}
