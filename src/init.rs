use crate::prelude::*;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fills flat weight buffers with values drawn uniformly from [0, 1).
///
/// Owns its RNG so reproducibility is controlled by whoever constructs it
/// rather than by a process-global engine.
pub struct WeightInitializer {
    rng: StdRng,
}

impl WeightInitializer {
    /// An initializer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic initializer. Same seed, same weights.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns exactly `count` values drawn independently from [0, 1).
    ///
    /// Asking for an empty buffer is a configuration error, not a
    /// condition to recover from.
    pub fn fill(&mut self, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(Error::EmptyInit);
        }

        let die = Uniform::from(0.0..1.0);
        Ok((0..count).map(|_| die.sample(&mut self.rng)).collect())
    }
}

impl Default for WeightInitializer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
