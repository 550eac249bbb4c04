use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Команда не может быть выполнена в текущем состоянии.
    #[error("Команда не выполнена: {0}")]
    InvalidCommand(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::InvalidCommand(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
