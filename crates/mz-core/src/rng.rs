//! Random number generation for maze construction
//!
//! Uses a seeded ChaCha RNG for reproducibility: the same seed and the
//! same configuration produce the same maze, provided draws happen in
//! the same order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Maze random number generator
///
/// Wraps ChaCha8Rng and remembers its seed. The generator is created by
/// the caller and passed into `Maze::generate`; there is no implicit
/// process-wide stream.
#[derive(Debug, Clone)]
pub struct MazeRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Only the seed is serialized; a deserialized generator starts fresh.
impl Serialize for MazeRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MazeRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(MazeRng::new(seed))
    }
}

impl MazeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `0..n`
    ///
    /// Returns 0 if n is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `lo..=hi`
    ///
    /// Returns `lo` without consuming a draw when the range is a single
    /// value (or empty), so degenerate extents and one-cell door
    /// overlaps do not disturb the stream.
    pub fn between(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform index into a collection of the given length
    ///
    /// Returns 0 if the collection is empty.
    pub fn index(&mut self, len: usize) -> usize {
        self.below(len)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }
}

impl Default for MazeRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
