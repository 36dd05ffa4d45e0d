//! Deterministic random number generation for dice.
//!
//! ## Key Features
//!
//! - **Injectable**: every roll takes a `&mut impl RandomSource`, there is no
//!   process-wide generator
//! - **Deterministic**: same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore, used to resume a
//!   match from a snapshot
//!
//! ## Usage
//!
//! ```
//! use dudo::core::{DiceRng, RandomSource};
//!
//! let mut rng = DiceRng::new(42);
//! let roll = rng.next_int(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.next_int(0, 100), b.next_int(0, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integers.
///
/// Implementations must be uniform over the inclusive range and, for
/// reproducible matches, deterministic given their seed.
pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (**self).next_int(min, max)
    }
}

/// Seeded ChaCha8 generator used for all dice in a match.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for DiceRng {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.inner.gen_range(lo..=hi)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// no matter how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
