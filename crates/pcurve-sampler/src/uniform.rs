use pcurve_core::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::{check_range, Sampler};

/// Uniform sampling over a closed interval backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct UniformSampler<R = StdRng> {
    rng: R,
}

impl UniformSampler<StdRng> {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sampler for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for UniformSampler<R> {
    fn sample(&mut self, min: f64, max: f64) -> Result<f64> {
        check_range(min, max)?;
        let value = self.rng.gen_range(min..=max);
        trace!(min, max, value, "uniform sample");
        Ok(value)
    }
}
