//! RNG tests for blackjack-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - gen_index / coin_flip
//! - стабильность hash-reseeding и раздельные потоки RngStream
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use blackjack_engine::domain::deck::Deck;
use blackjack_engine::engine::RandomSource;
use blackjack_engine::infra::{DeterministicRng, RngSeed, RngStream, SystemRng};

//
// TEST 1 - DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 - different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 - Deck.shuffle + RandomSource keeps all 52 cards
//
#[test]
fn deck_shuffle_works() {
    let mut rng = DeterministicRng::from_seed(999);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.cards.len(), 52);
    assert_ne!(deck.cards, Deck::standard_52().cards);

    let unique: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(unique.len(), 52, "Shuffled deck must contain 52 unique cards");
}

//
// TEST 4 - gen_index stays in range, covers every value
//
#[test]
fn gen_index_in_range() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut seen = [false; 5];

    for _ in 0..500 {
        let i = rng.gen_index(5);
        assert!(i < 5);
        seen[i] = true;
    }

    assert!(seen.iter().all(|&s| s), "All indexes should appear: {seen:?}");
}

//
// TEST 5 - gen_index(0) is total
//
#[test]
fn gen_index_zero_len_returns_zero() {
    let mut det = DeterministicRng::from_seed(1);
    let mut sys = SystemRng::default();

    assert_eq!(det.gen_index(0), 0);
    assert_eq!(sys.gen_index(0), 0);
}

//
// TEST 6 - coin_flip gives both sides
//
#[test]
fn coin_flip_gives_both_sides() {
    let mut rng = DeterministicRng::from_seed(2024);
    let heads = (0..1000).filter(|_| rng.coin_flip()).count();

    assert!(heads > 400 && heads < 600, "coin looks biased: {heads}/1000");
}

//
// TEST 7 - Deterministic reseeding hash pipeline works
//
#[test]
fn rngseed_derive_changes_seed() {
    let base = RngSeed::from_u64(777);

    let s1 = base.derive(1, RngStream::Deal);
    let s2 = base.derive(2, RngStream::Deal);
    assert_ne!(s1, s2, "Different rounds must produce different seeds");

    let s3 = base.derive(1, RngStream::Search(0));
    let s4 = base.derive(1, RngStream::Search(1));
    assert_ne!(s1, s3, "Deal and search streams must differ");
    assert_ne!(s3, s4, "Search requests must differ");

    assert_eq!(s1, base.derive(1, RngStream::Deal), "derive must be pure");
}

//
// TEST 8 - RngSeed → DeterministicRng → shuffle is deterministic
//
#[test]
fn rngseed_deterministic_shuffle() {
    let seed = RngSeed::from_u64(123);

    let mut r1 = seed.to_rng();
    let mut r2 = seed.to_rng();

    let mut a = (0..20).collect::<Vec<u32>>();
    let mut b = (0..20).collect::<Vec<u32>>();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b);
}

//
// TEST 9 - shuffle on empty / one-element slice must not crash
//
#[test]
fn shuffle_small_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);

    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);
}
