use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::RoundId;
use crate::engine::Move;

/// DTO раунда для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub round_id: RoundId,
    pub player_cards: Vec<Card>,
    pub player_value: u32,
    /// Карты дилера. Скрытая карта - `None`, пока игрок не закончил ход.
    pub dealer_cards: Vec<Option<Card>>,
    /// Очки только по видимым картам дилера.
    pub dealer_visible_value: u32,
    pub moves: Vec<Move>,
    /// Ход игрока окончен (перебор или stand).
    pub player_over: bool,
    pub cards_remaining: usize,
}

/// Статистика одного хода из корня дерева.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChildStatsDto {
    pub action: Move,
    pub visits: u32,
    pub wins: f64,
    pub win_rate: f64,
}

/// DTO рекомендации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendationDto {
    pub action: Move,
    pub budget: u32,
    /// Пусто, если поиск не запускался (сумма игрока меньше порога).
    pub children: Vec<ChildStatsDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,
    /// Результат булевой операции (hit / stand / undo).
    Applied { success: bool },
}
