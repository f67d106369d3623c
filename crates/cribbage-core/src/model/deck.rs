use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    Empty,
}

impl Deck {
    /// The 52 unique cards, Ace of Clubs first and King of Spades last.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ORDERED.iter().copied() {
            for suit in Suit::ALL.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns a uniformly random card: the deck is reshuffled and
    /// the front card popped.
    pub fn draw<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        self.shuffle_in_place(rng);
        Ok(self.cards.remove(0))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns a card to the deck unless a structurally equal one is already
    /// present, so the deck never holds duplicates.
    pub fn add_if_absent(&mut self, card: Card) {
        if !self.contains(card) {
            self.cards.push(card);
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl PartialEq for Deck {
    /// Two decks are equal when they hold the same set of cards, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len()
            && self.cards.iter().all(|&card| other.contains(card))
            && other.cards.iter().all(|&card| self.contains(card))
    }
}

impl Eq for Deck {}

#[cfg(test)]
mod tests {
    use super::{Deck, DeckError};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn standard_deck_runs_ace_of_clubs_to_king_of_spades() {
        let deck = Deck::standard();
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn draw_removes_exactly_one_card() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::standard();
        let drawn = deck.draw(&mut rng).unwrap();
        assert_eq!(deck.len(), 51);
        assert!(!deck.contains(drawn));
    }

    #[test]
    fn draw_from_empty_deck_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::standard();
        for _ in 0..52 {
            deck.draw(&mut rng).unwrap();
        }
        assert_eq!(deck.draw(&mut rng), Err(DeckError::Empty));
    }

    #[test]
    fn draw_then_readd_restores_the_full_deck() {
        let mut rng = StdRng::seed_from_u64(11);
        let reference = Deck::standard();
        let mut deck = Deck::standard();

        let drawn = deck.draw(&mut rng).unwrap();
        assert_ne!(deck, reference);

        deck.add_if_absent(drawn);
        assert_eq!(deck, reference);

        // a second re-insertion is a no-op
        deck.add_if_absent(drawn);
        assert_eq!(deck.len(), 52);
        assert_eq!(deck, reference);
    }

    #[test]
    fn equality_ignores_card_order() {
        let ordered = Deck::standard();
        let shuffled = Deck::shuffled_with_seed(3);
        assert_eq!(ordered, shuffled);
    }
}
