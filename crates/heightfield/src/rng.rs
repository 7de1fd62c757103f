//! Deterministic terrain RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Callers
//! that drive [`generate_with_rng`](crate::generation::generate_with_rng)
//! directly should construct a `TerrainRng` (or any `rand::Rng`) themselves,
//! so determinism and thread placement stay caller-controlled; nothing in
//! this crate holds a shared RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

/// Seeded RNG for terrain generation. The inner `ChaCha8Rng` implements
/// `rand::Rng`; use `rng.0` to draw from it.
pub struct TerrainRng(pub ChaCha8Rng);

impl Default for TerrainRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl TerrainRng {
    /// Create a `TerrainRng` from a `u64` seed.
    ///
    /// Seed `0` selects a fresh entropy-seeded sequence; any nonzero seed
    /// produces the same sequence on every platform.
    pub fn from_seed_u64(seed: u64) -> Self {
        if seed == 0 {
            Self(ChaCha8Rng::from_entropy())
        } else {
            Self(ChaCha8Rng::seed_from_u64(seed))
        }
    }
}
