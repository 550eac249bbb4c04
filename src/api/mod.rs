//! Внешний API блэкджек-движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет живой раунд;
//! - запросы (queries.rs) - только чтение;
//! - DTO (dto.rs) - удобные структуры для фронта;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - handler.rs - применение команд/запросов к `GameSession`.

pub mod commands;
pub mod dto;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
#[cfg(not(target_arch = "wasm32"))]
pub use handler::*;
pub use queries::*;
