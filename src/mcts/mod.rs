//! Monte Carlo Tree Search по ходам hit/stand.
//!
//! Каждая итерация: selection (UCB1) → expansion → случайный rollout →
//! backpropagation. Узлы хранят свои копии `RoundState`, поэтому живой
//! раунд вызывающего не меняется.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use search::{recommend, ChildStats, Recommendation, Searcher};
pub use tree::SearchTree;
