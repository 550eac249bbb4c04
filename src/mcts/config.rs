use serde::{Deserialize, Serialize};

/// Параметры поиска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Константа исследования `C` в UCB1.
    pub exploration: f64,
    /// Бонус к win rate ребёнка `stand` при выборе рекомендации.
    /// При равенстве выигрывает stand.
    pub stand_tie_bonus: f64,
    /// Ниже этой суммы поиск не запускается - всегда hit.
    pub always_hit_below: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: 1.4,
            stand_tie_bonus: 0.0001,
            always_hit_below: 12,
        }
    }
}
