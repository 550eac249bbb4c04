use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::engine::{Move, RandomSource, RoundState};
use crate::mcts::config::SearchConfig;
use crate::mcts::rollout::rollout;
use crate::mcts::tree::SearchTree;

/// Статистика одного прямого ребёнка корня.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChildStats {
    pub action: Move,
    pub visits: u32,
    pub wins: f64,
}

impl ChildStats {
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }
}

/// Результат поиска: рекомендованный ход + статистика детей корня
/// (пусто, если поиск не запускался).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub action: Move,
    pub children: Vec<ChildStats>,
}

/// MCTS по ходам hit/stand.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    pub config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Рекомендация для текущего раунда. Сам раунд не меняется.
    pub fn recommend<R: RandomSource>(
        &self,
        round: &RoundState,
        budget: u32,
        rng: &mut R,
    ) -> Recommendation {
        let player_value = round.player_value();
        if player_value < self.config.always_hit_below {
            debug!("mcts: value {player_value} < {}, hit without search", self.config.always_hit_below);
            return Recommendation {
                action: Move::Hit,
                children: Vec::new(),
            };
        }

        let mut tree = SearchTree::new(round.clone());

        for iteration in 0..budget {
            let selected = tree.select(self.config.exploration);
            let leaf = tree.expand(selected, rng).unwrap_or(selected);

            let node = tree.node(leaf);
            let result = rollout(&node.state, node.action, rng);
            trace!("mcts: iter {iteration} node {leaf} ({:?}) -> {result}", node.action);

            tree.backpropagate(leaf, result);
        }

        let children: Vec<ChildStats> = tree
            .children(SearchTree::ROOT)
            .filter_map(|child| {
                Some(ChildStats {
                    action: child.action?,
                    visits: child.visits,
                    wins: child.wins,
                })
            })
            .collect();

        let action = self.pick_action(&children);
        debug!(
            "mcts: value {player_value}, budget {budget}, {} nodes -> {action} {:?}",
            tree.len(),
            children
        );

        Recommendation { action, children }
    }

    /// Максимум win rate; stand получает маленький бонус.
    /// Без детей - stand.
    pub fn pick_action(&self, children: &[ChildStats]) -> Move {
        let mut best: Option<(Move, f64)> = None;

        for child in children {
            let bonus = if child.action == Move::Stand {
                self.config.stand_tie_bonus
            } else {
                0.0
            };
            let key = child.win_rate() + bonus;
            match best {
                Some((_, best_key)) if key <= best_key => {}
                _ => best = Some((child.action, key)),
            }
        }

        best.map_or(Move::Stand, |(action, _)| action)
    }
}

/// Поиск с параметрами по умолчанию.
pub fn recommend<R: RandomSource>(round: &RoundState, budget: u32, rng: &mut R) -> Recommendation {
    Searcher::default().recommend(round, budget, rng)
}
