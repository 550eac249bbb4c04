use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Одна колода из 52 карт. Верх колоды - конец вектора.
///
/// Источник случайности передаётся снаружи (`RandomSource`),
/// сама колода глобальный RNG не трогает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в каноническом порядке:
    /// 2c 2d 2h 2s 3c ... Ac Ad Ah As (ранг, затем масть).
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Новая перемешанная колода.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.shuffle(rng);
        deck
    }

    /// Колода с заданным порядком карт (для тестов и сценариев).
    /// Первой будет вытянута последняя карта.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Вернуть все 52 карты в канонический порядок и перемешать.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::standard_52();
        self.shuffle(rng);
    }

    /// Равномерно перемешать оставшиеся карты.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять верхнюю карту. `None`, если колода пуста (состояние не меняется).
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Убрать из колоды уже розданные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
