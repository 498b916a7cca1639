//! Seeding contract for space sampling.
//!
//! Sampling never touches process-wide RNG state: every draw goes through an
//! explicit generator handle. This module fixes which generator that is
//! (`RngStream`, ChaCha8) and how one root seed fans out into independent
//! streams for parallel samplers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default generator used across the crate. Reproducible across platforms.
pub type RngStream = ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Expands a root seed into a deterministic sequence of sub-seeds (SplitMix64).
///
/// Use one sub-seed per concurrent sampler so that no generator is shared.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    state: u64,
}

impl SeedSequence {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next sub-seed in the sequence.
    pub fn next_subseed(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// A fresh stream seeded from the next sub-seed.
    pub fn next_rng(&mut self) -> RngStream {
        RngStream::seed_from_u64(self.next_subseed())
    }

    pub fn split_n(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_subseed()).collect()
    }
}

/// Split a root seed into `n` sub-seeds.
pub fn split_n(seed: u64, n: usize) -> Vec<u64> {
    SeedSequence::new(seed).split_n(n)
}

/// A stream seeded directly from `seed`.
pub fn rng_from_seed(seed: u64) -> RngStream {
    RngStream::seed_from_u64(seed)
}
