//! Seeded move picker for playouts.
//!
//! A playout is reproducible from its seed alone. Batches of playouts draw
//! one child stream per game with [`GameRng::fork`], so the batch as a whole
//! is reproducible from a single seed too.
//!
//! ```
//! use kalah::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.fork().seed(), b.fork().seed());
//! assert_eq!(a.pick(&[1, 2, 3, 4, 5, 6]), b.pick(&[1, 2, 3, 4, 5, 6]));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio stride spreading child seeds across the `u64` range.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream plus the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    children: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            children: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child stream. The n-th child of a given seed is
    /// always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.children += 1;
        Self::new(self.seed.wrapping_add(self.children.wrapping_mul(FORK_STRIDE)))
    }

    /// Pick one pit uniformly, or `None` when there is nothing to pick.
    pub fn pick(&mut self, pits: &[usize]) -> Option<usize> {
        pits.choose(&mut self.stream).copied()
    }
}
