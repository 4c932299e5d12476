//! Growth noise RNG.
//!
//! Wraps `ChaCha8Rng` so identical seeds give identical curves on every
//! platform. Anything that accepts a `rand::Rng` accepts a `GrowthRng`.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used by `GrowthRng::default()`.
pub const DEFAULT_SEED: u64 = 42;

/// Seedable RNG for growth noise
#[derive(Debug, Clone)]
pub struct GrowthRng(ChaCha8Rng);

impl Default for GrowthRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl GrowthRng {
    /// Create a new `GrowthRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from the OS.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed_u64(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RngCore for GrowthRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
