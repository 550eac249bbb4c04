//! Тесты движка раунда (crate::engine::round).

use blackjack_engine::domain::{Card, Deck, Hand, RoundOutcome};
use blackjack_engine::engine::{EngineError, HandSide, Move, RandomSource, RoundState};

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }

    fn gen_index(&mut self, _len: usize) -> usize {
        0
    }
}

fn card(s: &str) -> Card {
    s.parse().expect("valid card string")
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| card(s)).collect()
}

/// Раунд с заданными руками и колодой. Последняя карта `deck` тянется первой.
fn scenario(player: &[&str], dealer: &[&str], deck: &[&str]) -> RoundState {
    RoundState::from_parts(
        Deck::from_cards(cards(deck)),
        Hand::from_cards(cards(player)),
        Hand::from_cards(cards(dealer)),
    )
}

//
// deal_new_round
//
#[test]
fn deal_new_round_alternates_player_and_dealer() {
    let mut rng = DummyRng;
    let round = RoundState::new(&mut rng);

    // Каноническая колода заканчивается на Ac Ad Ah As.
    assert_eq!(round.player.cards, cards(&["As", "Ad"]));
    assert_eq!(round.dealer.cards, cards(&["Ah", "Ac"]));
    assert_eq!(round.deck.remaining_count(), 48);
    assert!(round.moves().is_empty());
    assert_eq!(round.upcard(), Some(card("Ah")));
}

#[test]
fn deal_new_round_clears_previous_state() {
    let mut rng = DummyRng;
    let mut round = scenario(&["Ks", "7d", "2c"], &["9h", "8h"], &["3c"]);
    round.moves.push(Move::Hit);
    round.moves.push(Move::Stand);

    round.deal_new_round(&mut rng);

    assert_eq!(round.player.len(), 2);
    assert_eq!(round.dealer.len(), 2);
    assert!(round.moves().is_empty());
    assert_eq!(round.deck.remaining_count(), 48);
}

#[test]
fn with_hands_removes_dealt_cards_from_deck() {
    let mut rng = DummyRng;
    let round = RoundState::with_hands(cards(&["Ks", "7d"]), cards(&["2c", "9h"]), &mut rng);

    assert_eq!(round.deck.remaining_count(), 48);
    for c in cards(&["Ks", "7d", "2c", "9h"]) {
        assert!(!round.deck.cards.contains(&c));
    }
}

//
// take
//
#[test]
fn take_reports_whether_hand_is_still_alive() {
    let mut round = scenario(&["Ks", "5d"], &["2c", "3c"], &["Qh", "4h"]);

    assert!(round.take(HandSide::Player), "15 + 4 = 19 is alive");
    assert_eq!(round.player_value(), 19);

    assert!(!round.take(HandSide::Player), "19 + 10 busts");
    assert!(round.is_player_bust());
}

#[test]
fn take_on_empty_deck_is_a_noop() {
    let mut round = scenario(&["Ks", "5d"], &["2c", "3c"], &[]);
    let before = round.clone();

    assert!(!round.take(HandSide::Dealer));
    assert_eq!(round.try_take(HandSide::Player), Err(EngineError::DeckExhausted));
    assert_eq!(round, before);
}

//
// dealer_play
//
#[test]
fn dealer_play_stops_at_first_value_of_17_or_more() {
    // Дилер: 2 + 3 = 5, затем 4, 2, 5 → 16, затем 3 → 19.
    let mut round = scenario(&["Ks", "7d"], &["2c", "3d"], &["9c", "3h", "5s", "2d", "4h"]);

    round.dealer_play();

    assert_eq!(round.dealer.cards, cards(&["2c", "3d", "4h", "2d", "5s", "3h"]));
    assert_eq!(round.dealer_value(), 19);
    assert_eq!(round.deck.remaining_count(), 1);
}

#[test]
fn dealer_play_stands_on_soft_17() {
    let mut round = scenario(&["Ks", "7d"], &["Ac", "6d"], &["5h"]);
    round.dealer_play();
    assert_eq!(round.dealer_value(), 17);
    assert_eq!(round.dealer.len(), 2);
}

#[test]
fn dealer_play_stops_when_deck_runs_out() {
    let mut round = scenario(&["Ks", "7d"], &["2c", "3d"], &["4h"]);
    round.dealer_play();
    assert_eq!(round.dealer_value(), 9);
    assert!(round.deck.is_empty());
}

//
// evaluate_outcome
//
#[test]
fn evaluate_outcome_does_not_mutate_round() {
    let round = scenario(&["Ks", "7d"], &["2c", "3d"], &["9c", "3h", "5s", "2d", "4h"]);
    let before = round.clone();

    let outcome = round.evaluate_outcome();

    // Дилер дошёл бы до 19 против 17 игрока.
    assert_eq!(outcome, RoundOutcome::Loss);
    assert_eq!(round, before);
    assert_eq!(round.dealer.len(), 2);
}

#[test]
fn evaluate_outcome_player_bust_always_loses() {
    let round = scenario(&["Ks", "Qs", "5d"], &["Kc", "6d"], &["Qh"]);
    assert_eq!(round.evaluate_outcome(), RoundOutcome::Loss);

    // Даже против дилера, который сам перебрал бы.
    let round = scenario(&["Ks", "Qs", "5d"], &["Kc", "Qd", "Jh"], &[]);
    assert_eq!(round.evaluate_outcome(), RoundOutcome::Loss);
}

#[test]
fn evaluate_outcome_dealer_reaches_21() {
    let round = scenario(&["As", "9h"], &["Kc", "6d"], &["5h"]);
    assert_eq!(round.player_value(), 20);
    assert_eq!(round.evaluate_outcome(), RoundOutcome::Loss);
    assert_eq!(round.evaluate_outcome().score(), -1);
}

#[test]
fn evaluate_outcome_dealer_bust_wins() {
    let round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh"]);
    assert_eq!(round.evaluate_outcome(), RoundOutcome::Win);
}

#[test]
fn evaluate_outcome_equal_totals_push() {
    let round = scenario(&["Ks", "7d"], &["Kc", "7h"], &["Qh"]);
    assert_eq!(round.evaluate_outcome(), RoundOutcome::Push);
}

#[test]
fn evaluate_outcome_then_dealer_play_agree() {
    let mut round = scenario(&["Ks", "8d"], &["2c", "3d"], &["9c", "3h", "5s", "2d", "4h"]);

    let predicted = round.evaluate_outcome();
    round.dealer_play();

    assert_eq!(predicted, RoundOutcome::compare(round.player_value(), round.dealer_value()));
}

//
// player moves
//
#[test]
fn player_hit_logs_and_draws() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh", "3c"]);

    assert!(round.player_hit());
    assert_eq!(round.moves(), &[Move::Hit]);
    assert_eq!(round.player.cards, cards(&["Ks", "2d", "3c"]));
}

#[test]
fn player_hit_reports_draw_even_on_bust() {
    let mut round = scenario(&["Ks", "5d"], &["Kc", "6d"], &["Qh"]);

    assert!(round.player_hit(), "a card was drawn");
    assert!(round.is_player_bust());
    assert!(round.is_player_over());
}

#[test]
fn player_hit_on_empty_deck_changes_nothing() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &[]);
    let before = round.clone();

    assert!(!round.player_hit());
    assert_eq!(round, before);
}

#[test]
fn player_stand_always_succeeds() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &[]);
    assert!(!round.is_player_over());

    assert!(round.player_stand());
    assert_eq!(round.moves(), &[Move::Stand]);
    assert!(round.is_player_over());
}

//
// undo
//
#[test]
fn undo_after_hit_restores_hand_and_log() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh", "3c", "4c"]);
    round.player_hit();
    let before = (round.player.clone(), round.moves.clone());

    assert!(round.player_hit());
    assert!(round.undo_last_move());

    assert_eq!((round.player.clone(), round.moves.clone()), before);
}

#[test]
fn undo_after_stand_only_removes_log_entry() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh"]);
    round.player_stand();

    assert_eq!(round.try_undo(), Err(EngineError::MoveNotReversible(Move::Stand)));
    assert!(round.moves().is_empty());
    assert_eq!(round.player.len(), 2);
    assert!(!round.is_player_over());
}

#[test]
fn undo_with_empty_log_fails() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh"]);
    assert_eq!(round.try_undo(), Err(EngineError::NothingToUndo));
    assert!(!round.undo_last_move());
}

#[test]
fn undo_hit_never_removes_initial_cards() {
    let mut round = scenario(&["Ks", "2d"], &["Kc", "6d"], &["Qh"]);
    round.moves.push(Move::Hit);

    assert!(!round.undo_last_move());
    assert_eq!(round.player.len(), 2);
    assert!(round.moves().is_empty());
}
