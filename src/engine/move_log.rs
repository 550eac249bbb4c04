use serde::{Deserialize, Serialize};

use crate::engine::actions::Move;

/// Хронологический лог ходов игрока в раунде.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveLog {
    pub moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Игрок закончил свой ход.
    pub fn ends_with_stand(&self) -> bool {
        self.last() == Some(Move::Stand)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}
