use crate::game::phase::GamePhase;
use crate::model::board::{Board, BoardError};
use crate::model::card::Card;
use crate::model::deck::{Deck, DeckError};
use crate::model::hand::Hand;
use crate::model::player::{Player, PlayerSide};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::array;
use thiserror::Error;
use tracing::debug;

/// Cards dealt to each player at the start of a round.
pub const DEAL_SIZE: usize = 6;
/// Cards discarded into the crib before play begins.
pub const CRIB_SIZE: usize = 4;

/// One two-player game: the deck, both seats, the board, and the round-scoped
/// play state. The running sum always equals the scoring values of the cards
/// placed since the last stack reset.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    players: [Player; 2],
    board: Board,
    face_up: Option<Card>,
    played_cards: Vec<Card>,
    running_sum: u32,
    played_log: [Vec<Card>; 2],
    dealer: PlayerSide,
    current_player: PlayerSide,
    phase: GamePhase,
    rng: StdRng,
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("expected phase {expected}, game is in {actual}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("{0} is not in either hand")]
    CardNotInHand(Card),
    #[error("no face-up card has been revealed")]
    FaceUpCardMissing,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// What a single placement earned and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub scorer: PlayerSide,
    pub points: u32,
}

impl Game {
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dealer = if rng.gen_bool(0.5) {
            PlayerSide::A
        } else {
            PlayerSide::B
        };

        Self {
            deck: Deck::standard(),
            players: array::from_fn(|_| Player::new()),
            board: Board::new(),
            face_up: None,
            played_cards: Vec::new(),
            running_sum: 0,
            played_log: [Vec::new(), Vec::new()],
            dealer,
            current_player: dealer.other(),
            phase: GamePhase::NotStarted,
            rng,
            seed,
        }
    }

    /// Starts a round: reveals the face-up card, clears the round state, and
    /// deals six cards to each player, one at a time, alternating A then B.
    pub fn set_up(&mut self) -> Result<(), GameError> {
        self.phase = GamePhase::Deal;
        self.deck = Deck::shuffled(&mut self.rng);
        let face_up = self.deck.draw(&mut self.rng)?;
        self.face_up = Some(face_up);

        for player in &mut self.players {
            player.clear_hand();
            player.clear_crib();
        }
        for log in &mut self.played_log {
            log.clear();
        }
        self.played_cards.clear();
        self.running_sum = 0;

        for _ in 0..DEAL_SIZE {
            for side in PlayerSide::BOTH.iter().copied() {
                let card = self.deck.draw(&mut self.rng)?;
                self.players[side.index()].hand_mut().add(card);
            }
        }

        self.current_player = self.dealer.other();
        debug!(dealer = %self.dealer, face_up = %face_up, "dealt a new round");
        Ok(())
    }

    /// Moves a card from whichever hand holds it into the dealer's crib.
    /// Play begins once the crib is full.
    pub fn submit_discard(&mut self, card: Card) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Deal)?;
        let owner = self
            .holder_of(card)
            .ok_or(GameError::CardNotInHand(card))?;

        self.players[owner.index()].hand_mut().remove(card);
        self.players[self.dealer.index()].crib_mut().add(card);

        if self.players[self.dealer.index()].crib().len() == CRIB_SIZE {
            self.phase = GamePhase::Play;
            debug!(dealer = %self.dealer, "crib is full, play begins");
        }
        Ok(())
    }

    /// Places a card on the stack, credits its incremental score to the
    /// owner, and advances the turn. When neither player can answer the
    /// current running sum, the stack resets first and the card opens a fresh
    /// one.
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, GameError> {
        self.expect_phase(GamePhase::Play)?;
        let owner = self
            .holder_of(card)
            .ok_or(GameError::CardNotInHand(card))?;

        if !self.someone_has_legal_card() {
            self.played_cards.clear();
            self.running_sum = 0;
        }

        self.played_cards.push(card);
        self.running_sum += card.scoring_value();

        // The score is read while the card is still in the owner's hand, so
        // the go check sees the hand the opponent actually faced.
        let points = self.stack_points();
        self.board.add_points(owner, points as i32)?;
        self.players[owner.index()].hand_mut().remove(card);
        self.played_log[owner.index()].push(card);
        if points > 0 {
            debug!(scorer = %owner, points, running_sum = self.running_sum, "scored during play");
        }

        if self.board.has_won(owner) {
            self.phase = GamePhase::Over;
            debug!(winner = %owner, "game over during play");
            return Ok(PlayOutcome { scorer: owner, points });
        }

        self.advance_turn(owner);

        if self.hands_empty() {
            self.phase = GamePhase::Show;
            debug!("both hands played out, entering show");
        }
        Ok(PlayOutcome { scorer: owner, points })
    }

    /// Incremental score of the current stack, most recent card last:
    /// fifteen, unbroken multiples of the top card, the longest run ending at
    /// the top card, thirty-one, and otherwise the go point when neither
    /// player can answer.
    pub fn stack_points(&self) -> u32 {
        let mut total = 0;

        if self.running_sum == 15 {
            total += 2;
        }

        total += self.stack_multiples_points();
        total += self.stack_run_points();

        if self.running_sum == 31 {
            total += 2;
        } else if !self.someone_has_legal_card() && self.phase == GamePhase::Play {
            total += 1;
        }

        total
    }

    /// Matches of the top card's value scanning backward; the first
    /// non-matching card ends the scan for good.
    fn stack_multiples_points(&self) -> u32 {
        let Some((top, rest)) = self.played_cards.split_last() else {
            return 0;
        };
        let matches = rest
            .iter()
            .rev()
            .take_while(|card| card.rank == top.rank)
            .count();
        match matches {
            1 => 2,
            2 => 6,
            3 => 12,
            _ => 0,
        }
    }

    /// Largest window of most-recent cards whose sorted values are strictly
    /// consecutive. Shorter valid windows are superseded, not summed.
    fn stack_run_points(&self) -> u32 {
        let mut best = 0;
        for len in 3..=self.played_cards.len() {
            let mut values: Vec<u8> = self.played_cards[self.played_cards.len() - len..]
                .iter()
                .map(|card| card.rank.value())
                .collect();
            values.sort_unstable();
            if values.windows(2).all(|pair| pair[1] == pair[0] + 1) {
                best = len as u32;
            }
        }
        best
    }

    /// The opponent takes the turn only when they can legally answer;
    /// otherwise the same player keeps placing cards.
    fn advance_turn(&mut self, owner: PlayerSide) {
        let opponent = owner.other();
        if self.players[opponent.index()].has_legal_card(self.running_sum) {
            self.current_player = opponent;
        } else {
            self.current_player = owner;
        }
    }

    /// Scores the played-out hands and the crib against the face-up card:
    /// non-dealer's hand first, then the dealer's hand, then the dealer's
    /// crib. Each credit is checked against the win threshold, and scoring
    /// halts the moment someone wins.
    pub fn show_score(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Show)?;
        let face_up = self.face_up.ok_or(GameError::FaceUpCardMissing)?;

        for side in PlayerSide::BOTH.iter().copied() {
            let played = self.played_log[side.index()].clone();
            self.players[side.index()].set_hand(Hand::with_cards(played));
        }

        let non_dealer = self.dealer.other();
        let points = self.players[non_dealer.index()].hand().points(face_up);
        self.board.add_points(non_dealer, points as i32)?;
        debug!(scorer = %non_dealer, points, "counted hand");
        if self.board.has_won(non_dealer) {
            self.phase = GamePhase::Over;
            return Ok(());
        }

        let points = self.players[self.dealer.index()].hand().points(face_up);
        self.board.add_points(self.dealer, points as i32)?;
        debug!(scorer = %self.dealer, points, "counted hand");
        if self.board.has_won(self.dealer) {
            self.phase = GamePhase::Over;
            return Ok(());
        }

        let points = self.players[self.dealer.index()].crib().points(face_up);
        self.board.add_points(self.dealer, points as i32)?;
        debug!(scorer = %self.dealer, points, "counted crib");
        if self.board.has_won(self.dealer) {
            self.phase = GamePhase::Over;
        }
        Ok(())
    }

    /// Clears both hands and both cribs, replaces the deck, forgets the
    /// face-up card, and hands the deal to the other player.
    pub fn reset_round(&mut self) {
        for player in &mut self.players {
            player.clear_hand();
            player.clear_crib();
        }
        self.deck = Deck::shuffled(&mut self.rng);
        self.face_up = None;
        self.dealer = self.dealer.other();
        debug!(dealer = %self.dealer, "round reset, deal passes");
    }

    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        self.reset_round();
        self.set_up()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self, side: PlayerSide) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: PlayerSide) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn dealer(&self) -> PlayerSide {
        self.dealer
    }

    pub fn set_dealer(&mut self, side: PlayerSide) {
        self.dealer = side;
    }

    pub fn current_player(&self) -> PlayerSide {
        self.current_player
    }

    pub fn set_current_player(&mut self, side: PlayerSide) {
        self.current_player = side;
    }

    pub fn face_up_card(&self) -> Option<Card> {
        self.face_up
    }

    pub fn set_face_up(&mut self, card: Card) {
        self.face_up = Some(card);
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    pub fn running_sum(&self) -> u32 {
        self.running_sum
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn side_has_legal_card(&self, side: PlayerSide) -> bool {
        self.players[side.index()].has_legal_card(self.running_sum)
    }

    pub fn someone_has_legal_card(&self) -> bool {
        PlayerSide::BOTH
            .iter()
            .any(|&side| self.side_has_legal_card(side))
    }

    pub fn someone_has_cards(&self) -> bool {
        PlayerSide::BOTH
            .iter()
            .any(|&side| !self.players[side.index()].hand().is_empty())
    }

    pub fn hands_empty(&self) -> bool {
        !self.someone_has_cards()
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn holder_of(&self, card: Card) -> Option<PlayerSide> {
        PlayerSide::BOTH
            .iter()
            .copied()
            .find(|side| self.players[side.index()].hand().contains(card))
    }
}
