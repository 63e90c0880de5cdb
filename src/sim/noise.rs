//! Configurable Gaussian noise source for simulation.
//!
//! Provides zero-mean normal draws with deterministic seeding support.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Noise generator with configurable seed for reproducibility.
///
/// If seed is 0, uses OS entropy for non-deterministic behavior.
/// Otherwise, uses the provided seed for reproducible results.
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_os_rng()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Draw zero-mean Gaussian noise with the given standard deviation.
    #[inline]
    pub fn gaussian(&mut self, stddev: f64) -> f64 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Draw a vector of independent zero-mean Gaussian components.
    pub fn gaussian_vector(&mut self, len: usize, stddev: f64) -> Vec<f64> {
        (0..len).map(|_| self.gaussian(stddev)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_seed() {
        let mut noise1 = NoiseGenerator::new(42);
        let mut noise2 = NoiseGenerator::new(42);

        for _ in 0..100 {
            assert_eq!(noise1.gaussian(1.0), noise2.gaussian(1.0));
        }
    }

    #[test]
    fn test_zero_stddev() {
        let mut noise = NoiseGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(noise.gaussian(0.0), 0.0);
        }
    }

    #[test]
    fn test_vector_length_and_spread() {
        let mut noise = NoiseGenerator::new(7);
        let v = noise.gaussian_vector(1000, 2.0);
        assert_eq!(v.len(), 1000);

        let mean = v.iter().sum::<f64>() / v.len() as f64;
        let var = v.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (v.len() - 1) as f64;
        assert!(mean.abs() < 0.3, "mean too far from zero: {}", mean);
        assert!((var.sqrt() - 2.0).abs() < 0.3, "stddev off: {}", var.sqrt());
    }
}
