use core::fmt;

use serde::{Deserialize, Serialize};

/// Ход игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Hit,
    Stand,
}

impl Move {
    /// Оба хода в порядке, в котором их перебирает поиск.
    pub const ALL: [Move; 2] = [Move::Hit, Move::Stand];
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Hit => write!(f, "hit"),
            Move::Stand => write!(f, "stand"),
        }
    }
}

/// Чья рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandSide {
    Player,
    Dealer,
}
