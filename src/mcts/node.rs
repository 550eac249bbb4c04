use crate::domain::hand::BLACKJACK;
use crate::engine::{Move, RoundState};

/// Индекс узла в арене `SearchTree`.
pub type NodeId = usize;

/// Узел дерева поиска.
///
/// Хранит собственный снапшот раунда. Детей держит арена, узел знает только
/// их индексы; `parent` - невладеющая ссылка, нужна лишь для backpropagation.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub state: RoundState,
    /// Ход, который привёл в этот узел (`None` у корня).
    pub action: Option<Move>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visits: u32,
    /// Сумма результатов -1/0/+1, может быть отрицательной.
    pub wins: f64,
    pub untried: Vec<Move>,
}

impl SearchNode {
    pub fn new(state: RoundState, action: Option<Move>, parent: Option<NodeId>) -> Self {
        Self {
            state,
            action,
            parent,
            children: Vec::new(),
            visits: 0,
            wins: 0.0,
            untried: Move::ALL.to_vec(),
        }
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Перебор, ровно 21 или игрок встал.
    pub fn is_terminal(&self) -> bool {
        let value = self.state.player_value();
        value >= BLACKJACK || self.action == Some(Move::Stand)
    }

    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    /// UCB1: `wins/visits + C * sqrt(ln(N_parent) / visits)`.
    /// Непосещённый узел всегда предпочтительнее.
    pub fn ucb1(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        self.win_rate() + exploration * ((parent_visits as f64).ln() / n).sqrt()
    }
}
