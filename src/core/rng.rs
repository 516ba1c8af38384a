//! Deterministic random number generation with forking.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Independent branches, one per player's roll source
//!
//! ```
//! use rust_bowling::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut lane_one = rng.fork();
//! let mut lane_two = rng.fork();
//!
//! // Forks are deterministic: same parent seed, same fork order
//! let mut again = GameRng::new(42);
//! assert_eq!(lane_one.gen_pins(10), again.fork().gen_pins(10));
//! # let _ = lane_two.gen_pins(10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Knock down between 0 and `standing` pins, inclusive.
    pub fn gen_pins(&mut self, standing: u8) -> u8 {
        self.inner.gen_range(0..=standing)
    }
}
