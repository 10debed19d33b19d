//! Seeded randomness, one generator per deck.
//!
//! ## Key Features
//!
//! - **Replayable**: a generator remembers its seed, including one drawn
//!   from entropy, so any hand can be dealt again
//! - **Instance-scoped**: nothing is global, so games built from the same
//!   seed agree no matter how their calls interleave
//!
//! ```
//! use rust_klondike::core::{Card, GameRng};
//!
//! let mut a = Card::standard_deck();
//! let mut b = Card::standard_deck();
//! GameRng::new(7).shuffle(&mut a);
//! GameRng::new(7).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream tagged with the seed that started it.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A generator seeded from the thread RNG. The seed is kept for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..bound`. Zero when `bound` is zero.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.stream.gen_range(0..bound)
    }

    /// Permute `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }

    /// A uniformly chosen element, `None` if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}
