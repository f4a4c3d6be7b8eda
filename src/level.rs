//! Random node heights.
//!
//! Level 0 holds every element; each higher level holds a random subset of the level below.
//! With the default generator, a node reaches level `k` (counting from 1) with probability
//! `RATIO^-(k-1)`, which keeps the expected search cost logarithmic and the expected number of
//! links per node at `RATIO / (RATIO - 1)`.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// The maximum height of any node, and the number of links held by the head.
pub const MAX_LEVEL: usize = 32;

/// The inverse of the probability that a node is promoted one more level.
pub const RATIO: u32 = 4;

/// Chooses the height of each newly inserted node.
///
/// Custom generators make level distributions reproducible in tests:
///
/// ```
/// use rank_skiplist::{LevelGenerator, Natural, SkipList};
///
/// struct Flat;
///
/// impl LevelGenerator for Flat {
///     fn random_level(&mut self) -> usize {
///         1
///     }
/// }
///
/// let mut list = SkipList::with_level_generator(Natural, Flat);
/// list.extend([3, 1, 2]);
/// assert_eq!(list.rank_of(&3), Some(3));
/// ```
pub trait LevelGenerator {
    /// Returns a height in `1..=MAX_LEVEL`. Values outside that range are clamped.
    fn random_level(&mut self) -> usize;
}

/// Geometrically distributed heights: start at 1 and keep promoting while a 1-in-[`RATIO`] trial
/// succeeds, up to [`MAX_LEVEL`].
#[derive(Clone, Debug)]
pub struct Geometric<R = SmallRng> {
    rng: R,
}

impl Geometric<SmallRng> {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates a generator with a fixed seed, so that heights are reproducible.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Geometric<R> {
    /// Creates a generator drawing from `rng`.
    pub const fn with_rng(rng: R) -> Self {
        Self {
            rng,
        }
    }
}

impl Default for Geometric<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> LevelGenerator for Geometric<R> {
    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < MAX_LEVEL && self.rng.gen_ratio(1, RATIO) {
            level += 1;
        }
        level
    }
}
