use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Предел, после которого рука считается перебором.
pub const BLACKJACK: u32 = 21;

/// Очки набора карт по правилам блэкджека.
///
/// Тузы сначала идут как 11, затем по одному понижаются до 1,
/// пока сумма больше 21. Пустой слот (`None`) ничего не добавляет:
/// так считается, например, видимая часть руки дилера со скрытой картой.
pub fn score_cards<I>(cards: I) -> u32
where
    I: IntoIterator<Item = Option<Card>>,
{
    let mut total = 0;
    let mut soft_aces = 0;

    for card in cards.into_iter().flatten() {
        total += card.points();
        if card.rank.is_ace() {
            soft_aces += 1;
        }
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    total
}

/// Рука игрока или дилера.
///
/// Порядок карт важен только для отображения (первая карта дилера - открытая),
/// на очки он не влияет.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn value(&self) -> u32 {
        score_cards(self.cards.iter().copied().map(Some))
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Снять последнюю полученную карту.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Первая карта руки (для дилера - открытая карта).
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }
}

impl fmt::Display for Hand {
    /// Формат вида `[As, 9h]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Итог раунда с точки зрения игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    Loss,
    Push,
    Win,
}

impl RoundOutcome {
    /// Численный результат: -1 / 0 / +1.
    pub fn score(self) -> i8 {
        match self {
            RoundOutcome::Loss => -1,
            RoundOutcome::Push => 0,
            RoundOutcome::Win => 1,
        }
    }

    /// Сравнение итоговых сумм, когда игрок не перебрал.
    pub fn compare(player_value: u32, dealer_value: u32) -> Self {
        if dealer_value > BLACKJACK || player_value > dealer_value {
            RoundOutcome::Win
        } else if player_value < dealer_value {
            RoundOutcome::Loss
        } else {
            RoundOutcome::Push
        }
    }
}
