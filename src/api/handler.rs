//! Применение команд и запросов к `GameSession`.
//!
//! Тонкий слой: решает только, какой метод сессии вызвать и как
//! упаковать ответ. Сериализация в транспорт - через `serde_json`.

use crate::infra::mapping::{map_recommendation_to_dto, map_round_to_dto, DealerVisibility};
use crate::session::GameSession;

use super::commands::Command;
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{Query, QueryResponse};

/// Выполнить команду над живым раундом.
pub fn execute_command(session: &mut GameSession, command: Command) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::NewRound => {
            session.new_round();
            CommandResponse::Ok
        }
        Command::Hit => CommandResponse::Applied {
            success: session.checked_hit()?,
        },
        Command::Stand => CommandResponse::Applied {
            success: session.checked_stand()?,
        },
        Command::Undo => CommandResponse::Applied {
            success: session.undo(),
        },
        Command::DealerPlay => {
            session.dealer_play();
            CommandResponse::Ok
        }
    };
    Ok(response)
}

/// Выполнить запрос. `&mut` нужен только для счётчика поисков в сессии,
/// сам раунд не меняется.
pub fn execute_query(session: &mut GameSession, query: Query) -> QueryResponse {
    match query {
        Query::GetRound => {
            let round = session.round();
            QueryResponse::Round(map_round_to_dto(
                session.round_id(),
                round,
                DealerVisibility::for_round(round),
            ))
        }
        Query::GetOutcome => QueryResponse::Outcome(session.outcome().score()),
        Query::Recommend { budget } => {
            let budget = budget.unwrap_or(session.config().default_budget);
            let rec = session.recommend(Some(budget));
            QueryResponse::Recommendation(map_recommendation_to_dto(&rec, budget))
        }
    }
}

/// Разобрать команду из JSON.
pub fn decode_command(json: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Разобрать запрос из JSON.
pub fn decode_query(json: &str) -> Result<Query, ApiError> {
    Ok(serde_json::from_str(json)?)
}
