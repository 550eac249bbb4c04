//! Главный модуль блэкджек-движка с советником на MCTS.
//!
//! Здесь описываем ABI (Operation / Query / Response) для Linera и
//! собираем модули: доменная модель, движок раунда, поиск, API.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod mcts;
#[cfg(not(target_arch = "wasm32"))]
pub mod session;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};

use crate::api::{Command, CommandResponse, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
pub type BlackjackOperation = Command;

/// Запросы к сервису (read-only).
pub type BlackjackQuery = Query;

/// Ответы на запросы.
pub type BlackjackResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct BlackjackAbi;

impl ContractAbi for BlackjackAbi {
    type Operation = BlackjackOperation;
    type Response = CommandResponse;
}

impl ServiceAbi for BlackjackAbi {
    type Query = BlackjackQuery;
    type QueryResponse = BlackjackResponse;
}

#[cfg(not(target_arch = "wasm32"))]
pub use session::{GameSession, SessionConfig};
