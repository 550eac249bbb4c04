//! Доменная модель блэкджека: карты, колода, руки, итог раунда.

pub mod card;
pub mod deck;
pub mod hand;

/// Идентификатор раунда внутри сессии.
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
