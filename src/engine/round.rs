use log::trace;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, RoundOutcome, BLACKJACK};
use crate::engine::actions::{HandSide, Move};
use crate::engine::errors::EngineError;
use crate::engine::move_log::MoveLog;
use crate::engine::RandomSource;

/// Сколько карт получает каждая рука в начале раунда.
pub const INITIAL_HAND_SIZE: usize = 2;

/// Дилер добирает, пока у него меньше этого значения.
pub const DEALER_STANDS_ON: u32 = 17;

/// Состояние одного раунда: колода, две руки и лог ходов игрока.
///
/// `Clone` даёт полную независимую копию - на этом построен поиск:
/// каждый узел дерева хранит свой снапшот, а живой раунд не трогается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub moves: MoveLog,
}

impl RoundState {
    /// Новый раунд со свежей перемешанной колодой.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut round = Self::from_parts(Deck::standard_52(), Hand::new(), Hand::new());
        round.deal_new_round(rng);
        round
    }

    /// Собрать раунд из готовых частей (без раздачи).
    pub fn from_parts(deck: Deck, player: Hand, dealer: Hand) -> Self {
        Self {
            deck,
            player,
            dealer,
            moves: MoveLog::new(),
        }
    }

    /// Раунд с заданными руками: колода = оставшиеся карты, перемешанные.
    pub fn with_hands<R: RandomSource>(player: Vec<Card>, dealer: Vec<Card>, rng: &mut R) -> Self {
        let mut deck = Deck::standard_52();
        deck.remove_cards(&player);
        deck.remove_cards(&dealer);
        deck.shuffle(rng);
        Self::from_parts(deck, Hand::from_cards(player), Hand::from_cards(dealer))
    }

    /// Сброс колоды, очистка рук и лога, раздача P, D, P, D.
    pub fn deal_new_round<R: RandomSource>(&mut self, rng: &mut R) {
        self.deck.reset(rng);
        self.player.clear();
        self.dealer.clear();
        self.moves.clear();

        for _ in 0..INITIAL_HAND_SIZE {
            // Полная колода: 4 карты есть всегда.
            let _ = self.try_take(HandSide::Player);
            let _ = self.try_take(HandSide::Dealer);
        }
    }

    pub fn hand(&self, side: HandSide) -> &Hand {
        match side {
            HandSide::Player => &self.player,
            HandSide::Dealer => &self.dealer,
        }
    }

    fn hand_mut(&mut self, side: HandSide) -> &mut Hand {
        match side {
            HandSide::Player => &mut self.player,
            HandSide::Dealer => &mut self.dealer,
        }
    }

    pub fn hand_value(&self, side: HandSide) -> u32 {
        self.hand(side).value()
    }

    pub fn player_value(&self) -> u32 {
        self.player.value()
    }

    pub fn dealer_value(&self) -> u32 {
        self.dealer.value()
    }

    /// Открытая карта дилера.
    pub fn upcard(&self) -> Option<Card> {
        self.dealer.first()
    }

    pub fn moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    pub fn is_player_bust(&self) -> bool {
        self.player.is_bust()
    }

    /// Ход игрока окончен: перебор или последний ход - stand.
    pub fn is_player_over(&self) -> bool {
        self.is_player_bust() || self.moves.ends_with_stand()
    }

    /// Вытянуть карту в руку. Ошибка, если колода пуста (рука не меняется).
    pub fn try_take(&mut self, side: HandSide) -> Result<Card, EngineError> {
        let card = self.deck.draw().ok_or(EngineError::DeckExhausted)?;
        self.hand_mut(side).push(card);
        Ok(card)
    }

    /// Вытянуть карту в руку. `true`, если после этого рука не перебрала;
    /// `false` при переборе или пустой колоде.
    pub fn take(&mut self, side: HandSide) -> bool {
        match self.try_take(side) {
            Ok(_) => self.hand_value(side) <= BLACKJACK,
            Err(_) => false,
        }
    }

    /// Фиксированная политика дилера: добор до 17, стоп на пустой колоде.
    pub fn dealer_play(&mut self) {
        while self.dealer_value() < DEALER_STANDS_ON {
            if !self.take(HandSide::Dealer) {
                break;
            }
        }
        trace!("dealer_play: {} = {}", self.dealer, self.dealer_value());
    }

    /// Итог раунда для игрока.
    ///
    /// Дилер доигрывает на одноразовой копии: руки, колода и лог
    /// вызывающего не меняются. Чтобы зафиксировать карты дилера,
    /// нужно отдельно вызвать `dealer_play`.
    pub fn evaluate_outcome(&self) -> RoundOutcome {
        let player_value = self.player_value();
        if player_value > BLACKJACK {
            return RoundOutcome::Loss;
        }

        let mut scratch = self.clone();
        scratch.dealer_play();
        RoundOutcome::compare(player_value, scratch.dealer_value())
    }

    /// Hit: записать ход и взять карту.
    /// `false`, если колода пуста (тогда и в лог ничего не пишется).
    pub fn player_hit(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        self.moves.push(Move::Hit);
        self.try_take(HandSide::Player).is_ok()
    }

    /// Stand: записать ход. Всегда успешно.
    pub fn player_stand(&mut self) -> bool {
        self.moves.push(Move::Stand);
        true
    }

    /// Отменить последний ход.
    ///
    /// Запись из лога снимается в любом случае. Карта возвращается
    /// только для hit, если у игрока больше двух стартовых карт.
    pub fn try_undo(&mut self) -> Result<Move, EngineError> {
        let last = self.moves.pop().ok_or(EngineError::NothingToUndo)?;
        match last {
            Move::Hit if self.player.len() > INITIAL_HAND_SIZE => {
                // Карта уходит из игры, в колоду не возвращается.
                self.player.pop();
                Ok(Move::Hit)
            }
            other => Err(EngineError::MoveNotReversible(other)),
        }
    }

    pub fn undo_last_move(&mut self) -> bool {
        self.try_undo().is_ok()
    }
}
