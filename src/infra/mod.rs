//! Инфраструктурный слой вокруг движка:
//! - генерация ID раундов;
//! - RNG-реализации для движка и поиска;
//! - маппинги между domain/engine и API.

pub mod ids;
pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use rng::*;
pub use rng_seed::{RngSeed, RngStream};
