use crate::engine::RandomSource;

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32):
//    тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }

    fn gen_index(&mut self, len: usize) -> usize {
        use rand::Rng;

        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed → одинаковые раздачи и одинаковый поиск.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::from_seed(bytes),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    fn gen_index(&mut self, len: usize) -> usize {
        use rand::Rng;

        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

//
// ✅ WASM ВАРИАНТ (Linera контракт):
//    тут НЕТ rand / getrandom / wasm-bindgen.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // На wasm пока заглушка: колода остаётся в каноническом порядке.
    }

    fn gen_index(&mut self, _len: usize) -> usize {
        0
    }
}
