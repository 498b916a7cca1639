//! A space paired with the generator that samples it.

use super::{Domain, Sample, Space};
use crate::utils::rng::{RngStream, rng_from_seed};

/// Owns a `Space` and its own `RngStream`, for callers that keep one sampler
/// per environment instance. Not meant to be shared across threads; give
/// each worker its own (see `SeedSequence`).
#[derive(Clone, Debug)]
pub struct Sampler {
    space: Space,
    rng: RngStream,
}

impl Sampler {
    pub fn new(space: Space, seed: u64) -> Self {
        Self { space, rng: rng_from_seed(seed) }
    }

    pub fn space(&self) -> &Space { &self.space }

    /// Restart the stream; subsequent draws repeat those after `new(space, seed)`.
    pub fn reseed(&mut self, seed: u64) {
        log::trace!("reseeding sampler for {} space with {seed}", self.space.kind());
        self.rng = rng_from_seed(seed);
    }

    pub fn sample(&mut self) -> Sample {
        self.space.sample(&mut self.rng)
    }

    /// `n` consecutive draws.
    pub fn sample_n(&mut self, n: usize) -> Vec<Sample> {
        (0..n).map(|_| self.sample()).collect()
    }

    pub fn into_inner(self) -> Space { self.space }
}
