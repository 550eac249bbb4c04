use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::RoundId;

/// Простая генерация ID раундов на основе монотонного счётчика.
#[derive(Debug)]
pub struct IdGenerator {
    round_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            round_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Сколько ID уже выдано.
    pub fn issued(&self) -> u64 {
        self.round_counter.load(Ordering::Relaxed) - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
