use cribbage_core::game::phase::GamePhase;
use cribbage_core::game::serialization::GameSnapshot;
use cribbage_core::game::state::{DEAL_SIZE, Game};
use cribbage_core::model::card::Card;
use cribbage_core::model::player::PlayerSide;

/// Picks the card a well-behaved client would send next: the current
/// player's first legal card, or any card once both players are stuck.
fn next_card(game: &Game) -> Card {
    let mut side = game.current_player();
    if game.player(side).hand().is_empty() {
        side = side.other();
    }
    let hand = game.player(side).hand();
    hand.iter()
        .copied()
        .find(|card| card.is_playable(game.running_sum()))
        .unwrap_or(hand.cards()[0])
}

#[test]
fn a_seeded_round_runs_from_deal_to_the_next_deal() {
    let mut game = Game::with_seed(2024);
    let first_dealer = game.dealer();

    game.set_up().unwrap();
    assert_eq!(game.phase(), GamePhase::Deal);
    assert!(game.face_up_card().is_some());
    let face_up = game.face_up_card().unwrap();

    // Both players push two cards into the dealer's crib.
    let mut discards = Vec::new();
    for side in PlayerSide::BOTH.iter().copied() {
        let hand = game.player(side).hand();
        discards.push(hand.cards()[0]);
        discards.push(hand.cards()[1]);
    }
    for card in discards {
        game.submit_discard(card).unwrap();
    }
    assert_eq!(game.phase(), GamePhase::Play);
    assert_eq!(game.player(first_dealer).crib().len(), 4);

    // Play all eight remaining cards.
    let mut play_points = [0u32; 2];
    for _ in 0..16 {
        if game.phase() != GamePhase::Play {
            break;
        }
        let outcome = game.play(next_card(&game)).unwrap();
        play_points[outcome.scorer.index()] += outcome.points;
    }
    assert_eq!(game.phase(), GamePhase::Show);
    assert!(game.hands_empty());
    assert_eq!(game.board().standings(), &play_points);

    game.show_score().unwrap();

    // Show credits are exactly the rebuilt hands and the crib against the
    // face-up card.
    let non_dealer = first_dealer.other();
    let expected_non_dealer =
        play_points[non_dealer.index()] + game.player(non_dealer).hand().points(face_up);
    let expected_dealer = play_points[first_dealer.index()]
        + game.player(first_dealer).hand().points(face_up)
        + game.player(first_dealer).crib().points(face_up);
    assert_eq!(game.board().score(non_dealer), expected_non_dealer);
    assert_eq!(game.board().score(first_dealer), expected_dealer);

    let snapshot = GameSnapshot::capture(&game);
    assert_eq!(snapshot.points, *game.board().standings());
    assert_eq!(snapshot.won, [false, false]);

    // The next round passes the deal and starts clean.
    game.start_new_round().unwrap();
    assert_eq!(game.dealer(), first_dealer.other());
    assert_eq!(game.phase(), GamePhase::Deal);
    assert_eq!(game.current_player(), first_dealer);
    assert_eq!(game.running_sum(), 0);
    assert!(game.played_cards().is_empty());
    for side in PlayerSide::BOTH.iter().copied() {
        assert_eq!(game.player(side).hand().len(), DEAL_SIZE);
        assert!(game.player(side).crib().is_empty());
    }
}

#[test]
fn two_seeded_games_replay_identically() {
    let mut first = Game::with_seed(777);
    let mut second = Game::with_seed(777);

    for game in [&mut first, &mut second] {
        game.set_up().unwrap();
        let mut discards = Vec::new();
        for side in PlayerSide::BOTH.iter().copied() {
            let hand = game.player(side).hand();
            discards.push(hand.cards()[0]);
            discards.push(hand.cards()[1]);
        }
        for card in discards {
            game.submit_discard(card).unwrap();
        }
        for _ in 0..16 {
            if game.phase() != GamePhase::Play {
                break;
            }
            let card = next_card(game);
            game.play(card).unwrap();
        }
        game.show_score().unwrap();
    }

    assert_eq!(first.dealer(), second.dealer());
    assert_eq!(first.face_up_card(), second.face_up_card());
    assert_eq!(first.board().standings(), second.board().standings());
    assert_eq!(
        GameSnapshot::capture(&first),
        GameSnapshot::capture(&second)
    );
}
