//! RngSeed - доменный seed для RNG сессии.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || round_id || stream)
//!   - создавать DeterministicRng из seed
//!
//! Раздача и поиск берут разные потоки, поэтому карты раунда N
//! не зависят от того, сколько раз в раунде N-1 спрашивали совет.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoundId;

/// Независимые потоки случайности внутри одного раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RngStream {
    /// Перемешивание колоды при раздаче.
    Deal,
    /// Поиск рекомендации (`n` - номер запроса в раунде).
    Search(u32),
}

impl RngStream {
    fn tag(self) -> [u8; 8] {
        match self {
            RngStream::Deal => [0u8; 8],
            RngStream::Search(n) => (u64::from(n) + 1).to_le_bytes(),
        }
    }
}

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение: новый seed для раунда и потока.
    pub fn derive(&self, round_id: RoundId, stream: RngStream) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"BLACKJACK_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(round_id.to_le_bytes());
        hasher.update(stream.tag());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> crate::infra::rng::DeterministicRng {
        crate::infra::rng::DeterministicRng::from_seed_bytes(self.bytes)
    }
}
