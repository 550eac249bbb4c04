//! Игровая сессия: один живой раунд + seed + счётчик раундов.
//!
//! Сессия - то, что держат транспорт и CLI. Она только делегирует в
//! `RoundState` и `Searcher`, собственной игровой логики здесь нет.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::hand::RoundOutcome;
use crate::domain::RoundId;
use crate::engine::{EngineError, Move, RoundState};
use crate::infra::{IdGenerator, RngSeed, RngStream};
use crate::mcts::{Recommendation, SearchConfig, Searcher};

/// Конфиг сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Базовый seed. `None` - случайный при создании сессии.
    pub seed: Option<u64>,
    /// Сколько итераций MCTS, если в запросе бюджет не указан.
    pub default_budget: u32,
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_budget: 50,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Конфиг из JSON; отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Сессия с одним живым раундом.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    seed: RngSeed,
    ids: IdGenerator,
    round_id: RoundId,
    /// Сколько раз в текущем раунде запускали поиск.
    searches: u32,
    searcher: Searcher,
    round: RoundState,
}

impl GameSession {
    /// Создать сессию и сразу раздать первый раунд.
    pub fn new(config: SessionConfig) -> Self {
        let base = config.seed.unwrap_or_else(rand::random);
        let seed = RngSeed::from_u64(base);
        let ids = IdGenerator::new();
        let round_id = ids.next_round_id();
        let round = RoundState::new(&mut seed.derive(round_id, RngStream::Deal).to_rng());

        info!("session: seed {base}, round {round_id} dealt");

        Self {
            searcher: Searcher::new(config.search.clone()),
            config,
            seed,
            ids,
            round_id,
            searches: 0,
            round,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Начать новый раунд (колода сбрасывается и перемешивается).
    pub fn new_round(&mut self) {
        self.round_id = self.ids.next_round_id();
        self.searches = 0;

        let mut rng = self.seed.derive(self.round_id, RngStream::Deal).to_rng();
        self.round.deal_new_round(&mut rng);

        info!(
            "session: round {} dealt, player {} = {}",
            self.round_id,
            self.round.player,
            self.round.player_value()
        );
    }

    pub fn hit(&mut self) -> bool {
        let drawn = self.round.player_hit();
        debug!("session: hit -> {drawn}, player {}", self.round.player);
        drawn
    }

    pub fn stand(&mut self) -> bool {
        self.round.player_stand()
    }

    /// Hit для внешних клиентов: после stand или перебора ход запрещён.
    pub fn checked_hit(&mut self) -> Result<bool, EngineError> {
        if self.round.is_player_over() {
            return Err(EngineError::PlayerTurnOver);
        }
        Ok(self.hit())
    }

    /// Stand для внешних клиентов: повторный stand запрещён.
    pub fn checked_stand(&mut self) -> Result<bool, EngineError> {
        if self.round.is_player_over() {
            return Err(EngineError::PlayerTurnOver);
        }
        Ok(self.stand())
    }

    pub fn try_undo(&mut self) -> Result<Move, EngineError> {
        self.round.try_undo()
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Зафиксировать карты дилера в живом раунде.
    pub fn dealer_play(&mut self) {
        self.round.dealer_play();
    }

    /// Итог без фиксации карт дилера.
    pub fn outcome(&self) -> RoundOutcome {
        self.round.evaluate_outcome()
    }

    /// Рекомендация для живого раунда. Раунд не меняется.
    pub fn recommend(&mut self, budget: Option<u32>) -> Recommendation {
        let budget = budget.unwrap_or(self.config.default_budget);
        let stream = RngStream::Search(self.searches);
        self.searches += 1;

        let mut rng = self.seed.derive(self.round_id, stream).to_rng();
        self.searcher.recommend(&self.round, budget, &mut rng)
    }
}
