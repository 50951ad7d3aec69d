//! Deterministic random number generation.
//!
//! Strategies that need randomness draw it from a seeded `GameRng`, so a
//! game played from the same seed is reproducible. Forking derives
//! independent streams, one per player.
//!
//! ```
//! use rps_referee::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let first = rng.fork();
//! let second = rng.fork();
//! assert_ne!(first.seed(), second.seed());
//!
//! // Same seed, same forks
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().seed(), first.seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent RNG. Each call yields a different, but
    /// reproducible, stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
