//! Unbiased shuffling.
//!
//! ```
//! use pair_match::core::shuffle;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let items = vec!['a', 'b', 'c'];
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let shuffled = shuffle(&items, &mut rng);
//!
//! assert_eq!(items, vec!['a', 'b', 'c']);
//! assert_eq!(shuffled.len(), 3);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly random permutation of `items` as a new vector.
///
/// The input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
