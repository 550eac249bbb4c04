// tests/infra_test.rs

use blackjack_engine::{
    domain::{Card, Deck, Hand},
    engine::{Move, RoundState},
    infra::{
        ids::IdGenerator,
        mapping::{map_recommendation_to_dto, map_round_to_dto, DealerVisibility},
    },
    mcts::{ChildStats, Recommendation, SearchConfig},
    SessionConfig,
};

fn card(s: &str) -> Card {
    s.parse().expect("valid card string")
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| card(s)).collect()
}

/// Утилита: раунд с фиксированными руками.
fn make_round(player: &[&str], dealer: &[&str], deck: &[&str]) -> RoundState {
    RoundState::from_parts(
        Deck::from_cards(cards(deck)),
        Hand::from_cards(cards(player)),
        Hand::from_cards(cards(dealer)),
    )
}

// ----------------------
// ids.rs
// ----------------------

#[test]
fn id_generator_is_monotonic_from_one() {
    let ids = IdGenerator::default();
    assert_eq!(ids.issued(), 0);

    assert_eq!(ids.next_round_id(), 1);
    assert_eq!(ids.next_round_id(), 2);
    assert_eq!(ids.next_round_id(), 3);
    assert_eq!(ids.issued(), 3);
}

// ----------------------
// mapping.rs
// ----------------------

#[test]
fn upcard_only_view_hides_everything_but_first_dealer_card() {
    let round = make_round(&["Ks", "7d"], &["As", "9h", "2c"], &["3c", "4c"]);

    let dto = map_round_to_dto(11, &round, DealerVisibility::UpcardOnly);

    assert_eq!(dto.round_id, 11);
    assert_eq!(dto.player_cards, cards(&["Ks", "7d"]));
    assert_eq!(dto.player_value, 17);
    assert_eq!(dto.dealer_cards, vec![Some(card("As")), None, None]);
    assert_eq!(dto.dealer_visible_value, 11);
    assert_eq!(dto.cards_remaining, 2);
    assert!(!dto.player_over);
}

#[test]
fn revealed_view_shows_full_dealer_hand() {
    let mut round = make_round(&["Ks", "7d"], &["As", "9h", "2c"], &[]);
    round.player_stand();

    let dto = map_round_to_dto(1, &round, DealerVisibility::Revealed);

    assert_eq!(
        dto.dealer_cards,
        vec![Some(card("As")), Some(card("9h")), Some(card("2c"))]
    );
    // 11 + 9 + 2 = 22 → туз понижается → 12
    assert_eq!(dto.dealer_visible_value, 12);
    assert_eq!(dto.moves, vec![Move::Stand]);
    assert!(dto.player_over);
}

#[test]
fn visibility_follows_player_turn() {
    let mut round = make_round(&["Ks", "5d"], &["9c", "7h"], &["Qh"]);
    assert_eq!(DealerVisibility::for_round(&round), DealerVisibility::UpcardOnly);

    // Перебор тоже заканчивает ход игрока.
    round.player_hit();
    assert!(round.is_player_bust());
    assert_eq!(DealerVisibility::for_round(&round), DealerVisibility::Revealed);

    let mut round = make_round(&["Ks", "5d"], &["9c", "7h"], &["Qh"]);
    round.player_stand();
    assert_eq!(DealerVisibility::for_round(&round), DealerVisibility::Revealed);
}

#[test]
fn empty_dealer_hand_maps_to_empty_view() {
    let round = make_round(&[], &[], &["Qh"]);
    let dto = map_round_to_dto(1, &round, DealerVisibility::UpcardOnly);

    assert!(dto.dealer_cards.is_empty());
    assert_eq!(dto.dealer_visible_value, 0);
    assert_eq!(dto.player_value, 0);
}

#[test]
fn recommendation_dto_carries_win_rates() {
    let rec = Recommendation {
        action: Move::Stand,
        children: vec![
            ChildStats { action: Move::Hit, visits: 4, wins: -2.0 },
            ChildStats { action: Move::Stand, visits: 6, wins: 3.0 },
        ],
    };

    let dto = map_recommendation_to_dto(&rec, 10);

    assert_eq!(dto.action, Move::Stand);
    assert_eq!(dto.budget, 10);
    assert_eq!(dto.children.len(), 2);
    assert_eq!(dto.children[0].action, Move::Hit);
    assert_eq!(dto.children[0].win_rate, -0.5);
    assert_eq!(dto.children[1].visits, 6);
    assert_eq!(dto.children[1].win_rate, 0.5);
}

#[test]
fn recommendation_dto_without_search() {
    let rec = Recommendation {
        action: Move::Hit,
        children: Vec::new(),
    };
    let dto = map_recommendation_to_dto(&rec, 50);
    assert_eq!(dto.action, Move::Hit);
    assert!(dto.children.is_empty());
}

// ----------------------
// SessionConfig
// ----------------------

#[test]
fn session_config_defaults() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.default_budget, 50);
    assert_eq!(cfg.search, SearchConfig::default());
    assert_eq!(cfg.search.exploration, 1.4);
    assert_eq!(cfg.search.stand_tie_bonus, 0.0001);
    assert_eq!(cfg.search.always_hit_below, 12);
}

#[test]
fn session_config_partial_json_keeps_defaults() {
    let cfg = SessionConfig::from_json_str(r#"{"default_budget": 200}"#).expect("valid json");
    assert_eq!(cfg.default_budget, 200);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.search, SearchConfig::default());

    let cfg = SessionConfig::from_json_str(r#"{"seed": 7, "search": {"exploration": 2.0}}"#)
        .expect("valid json");
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.default_budget, 50);
    assert_eq!(cfg.search.exploration, 2.0);
    assert_eq!(cfg.search.always_hit_below, 12);

    assert_eq!(SessionConfig::from_json_str("{}").expect("empty"), SessionConfig::default());
}

#[test]
fn session_config_rejects_bad_json() {
    assert!(SessionConfig::from_json_str("{\"default_budget\": \"many\"}").is_err());
    assert!(SessionConfig::from_json_str("not json").is_err());
}
