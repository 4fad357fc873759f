//! Deterministic random number generation for column shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Seed capture**: `seed()` reports the seed so a game can be replayed
//! - **Entropy fallback**: `from_entropy()` when no seed is configured
//!
//! ```
//! use pair_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(a.shuffled(&items), b.shuffled(&items));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::shuffle::shuffle;

/// Seedable RNG used to shuffle the right-hand column.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return a shuffled copy of `items`.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        shuffle(items, &mut self.inner)
    }
}
