//! Deterministic random number generation for deck setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Replayable**: Entropy-seeded RNGs still record their seed
//! - **Injectable**: Tests pass a fixed seed, production uses OS entropy
//!
//! ## Usage
//!
//! ```
//! use matchup_memory::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut data = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut data);
//!
//! // Same seed, same permutation
//! let mut rng2 = GameRng::new(42);
//! let mut data2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut data2);
//! assert_eq!(data, data2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for shuffling decks and selecting icons.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// The seed is retained so a game can always be reproduced.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and available via [`GameRng::seed`],
    /// so even entropy-seeded games can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.gen::<u64>();
        Self::new(seed)
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (unbiased Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
