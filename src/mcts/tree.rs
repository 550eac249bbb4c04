use crate::engine::{HandSide, Move, RandomSource, RoundState};
use crate::mcts::node::{NodeId, SearchNode};

/// Арена узлов. Корень всегда под индексом 0.
///
/// Дерево живёт ровно один вызов поиска и выбрасывается целиком.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    /// Корень - копия переданного раунда.
    pub fn new(root_state: RoundState) -> Self {
        Self {
            nodes: vec![SearchNode::new(root_state, None, None)],
        }
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn root(&self) -> &SearchNode {
        self.node(Self::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Дети узла в порядке создания.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        self.nodes[id].children.iter().map(move |&c| &self.nodes[c])
    }

    /// Selection: спуск от корня, пока узел полностью раскрыт и не терминален.
    pub fn select(&self, exploration: f64) -> NodeId {
        let mut current = Self::ROOT;
        loop {
            let node = &self.nodes[current];
            if !node.is_fully_expanded() || node.is_terminal() {
                return current;
            }
            match self.best_child_ucb1(current, exploration) {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    /// Ребёнок с максимальным UCB1; при равенстве - первый по порядку.
    fn best_child_ucb1(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let parent_visits = self.nodes[id].visits;
        let mut best: Option<(NodeId, f64)> = None;

        for &child in &self.nodes[id].children {
            let score = self.nodes[child].ucb1(parent_visits, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child, score)),
            }
        }

        best.map(|(child, _)| child)
    }

    /// Expansion: случайный ещё не опробованный ход.
    /// `None`, если узел терминален или уже полностью раскрыт.
    pub fn expand<R: RandomSource>(&mut self, id: NodeId, rng: &mut R) -> Option<NodeId> {
        let node = &self.nodes[id];
        if node.is_terminal() || node.is_fully_expanded() {
            return None;
        }
        let pick = rng.gen_index(node.untried.len());
        let action = node.untried[pick];
        Some(self.add_child(id, action))
    }

    /// Материализовать ребёнка: копия состояния, для hit - одна карта игроку.
    pub fn add_child(&mut self, parent: NodeId, action: Move) -> NodeId {
        let mut state = self.nodes[parent].state.clone();
        if action == Move::Hit {
            // Пустая колода: ребёнок просто совпадает с родителем.
            let _ = state.take(HandSide::Player);
        }

        let child = self.nodes.len();
        self.nodes.push(SearchNode::new(state, Some(action), Some(parent)));

        let parent_node = &mut self.nodes[parent];
        parent_node.children.push(child);
        parent_node.untried.retain(|&a| a != action);
        child
    }

    /// Backpropagation: узел и все предки до корня включительно.
    pub fn backpropagate(&mut self, from: NodeId, result: f64) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            node.visits += 1;
            node.wins += result;
            current = node.parent;
        }
    }
}
