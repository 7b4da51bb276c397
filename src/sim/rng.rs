//! Uniform range sampling for gap placement

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly distributed floats
pub trait RangeSource {
    /// Sample uniformly from `[min, max]`. Callers guarantee `min < max`.
    fn sample(&mut self, min: f32, max: f32) -> f32;
}

/// PCG-backed range source, seeded once per process
#[derive(Debug, Clone)]
pub struct GapRng {
    seed: u64,
    rng: Pcg32,
}

impl GapRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RangeSource for GapRng {
    fn sample(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min < max, "empty sample range [{min}, {max}]");
        self.rng.random_range(min..=max)
    }
}
