//! Движок раунда блэкджека: колода, руки, политика дилера, итог.
//!
//! Высокоуровневый объект: `RoundState`
//! Основные операции:
//!   - `deal_new_round` – новая раздача (игрок, дилер, игрок, дилер)
//!   - `player_hit` / `player_stand` / `undo_last_move` – ходы игрока
//!   - `evaluate_outcome` – итог без фиксации карт дилера

pub mod actions;
pub mod errors;
pub mod move_log;
pub mod round;

pub use actions::{HandSide, Move};
pub use errors::EngineError;
pub use move_log::MoveLog;
pub use round::RoundState;

/// RNG интерфейс для engine и поиска.
/// Реализации - в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..len`. Для `len == 0` возвращает 0.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Честная монетка.
    fn coin_flip(&mut self) -> bool {
        self.gen_index(2) == 0
    }
}
