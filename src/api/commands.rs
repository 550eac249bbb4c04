use serde::{Deserialize, Serialize};

/// Команда верхнего уровня - всё, что меняет живой раунд.
///
/// Эти команды превращаются в операции `BlackjackAbi`,
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать (или перезапустить) раунд.
    NewRound,

    /// Игрок берёт карту.
    Hit,

    /// Игрок останавливается.
    Stand,

    /// Отменить последний ход.
    Undo,

    /// Дилер доигрывает, и его карты фиксируются в живом раунде.
    ///
    /// Запрос итога (`Query::GetOutcome`) этого не делает.
    DealerPlay,
}
