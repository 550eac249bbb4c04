use thiserror::Error;

use crate::engine::actions::Move;

/// Ошибки движка раунда. Все восстановимые: булевы операции
/// `RoundState` превращают их в `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Колода пуста")]
    DeckExhausted,

    #[error("Нет ходов для отмены")]
    NothingToUndo,

    #[error("Ход {0} нельзя отменить")]
    MoveNotReversible(Move),

    #[error("Ход игрока уже окончен")]
    PlayerTurnOver,
}
