use crate::domain::hand::BLACKJACK;
use crate::engine::{HandSide, Move, RandomSource, RoundState};

/// Simulation: оценить узел одним случайным доигрыванием.
///
/// Работает на своей копии состояния. Колода перемешивается заново, чтобы
/// доигрывание не знало точного порядка оставшихся карт.
pub fn rollout<R: RandomSource>(state: &RoundState, action: Option<Move>, rng: &mut R) -> f64 {
    let mut sim = state.clone();
    sim.deck.shuffle(rng);

    let value = sim.player_value();
    if action == Some(Move::Hit) && value > BLACKJACK {
        return -1.0;
    }
    if action == Some(Move::Stand) || value == BLACKJACK {
        return f64::from(sim.evaluate_outcome().score());
    }

    // Случайная политика: монетка hit/stand, пока меньше 21.
    while sim.player_value() < BLACKJACK {
        if !rng.coin_flip() {
            break;
        }
        if !sim.take(HandSide::Player) {
            break;
        }
    }

    f64::from(sim.evaluate_outcome().score())
}
