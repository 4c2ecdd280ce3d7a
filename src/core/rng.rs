//! Deterministic random number generation for building random tag systems.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical systems
//! - **Forkable**: Independent streams for rules and initial words
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_tag::core::TagRng;
//!
//! let mut rng = TagRng::new(42);
//! let mut words = rng.fork();
//!
//! let mut again = TagRng::new(42);
//! let mut words_again = again.fork();
//! assert_eq!(words.gen_range(0..100), words_again.gen_range(0..100));
//! ```

use rand::distributions::uniform::SampleRange;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct TagRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl TagRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in a half-open or inclusive range.
    ///
    /// Panics on an empty range.
    pub fn gen_range<R: SampleRange<usize>>(&mut self, range: R) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Panics unless `probability` is in `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> TagRngState {
        TagRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &TagRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    pub fork_counter: u64,
}
