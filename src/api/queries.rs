use serde::{Deserialize, Serialize};

use super::dto::{RecommendationDto, RoundViewDto};

/// Запросы "только чтение" (живой раунд не меняется).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние раунда: руки, очки, лог ходов.
    GetRound,

    /// Итог раунда -1 / 0 / +1. Дилер доигрывает на копии.
    GetOutcome,

    /// Рекомендация MCTS. `None` - бюджет из конфига сессии.
    Recommend { budget: Option<u32> },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Round(RoundViewDto),
    Outcome(i8),
    Recommendation(RecommendationDto),
}
