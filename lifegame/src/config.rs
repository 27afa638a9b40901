// config.rs - Simulation parameters

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{LifeError, Result};

/// Parameters for a randomly seeded simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Rows in the grid
    pub height: usize,
    /// Columns in the grid
    pub width: usize,
    /// Probability that a cell starts alive
    pub survival_rate: f64,
    /// Pause between rendered generations; only the driver uses it
    pub interval: Duration,
    /// Fixed seed for a reproducible first generation
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(height: usize, width: usize, survival_rate: f64, interval: Duration) -> Self {
        Self {
            height,
            width,
            survival_rate,
            interval,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generator for the first generation: reproducible with `seed`, otherwise
    /// seeded from the thread RNG. Call once and reuse the result.
    pub fn rng(&self) -> Xoshiro256PlusPlus {
        match self.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// Checks the values a user can get wrong before any grid is built.
    /// The engine itself only rejects zero dimensions; out-of-range rates
    /// saturate there, so front ends call this to reject them early.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(LifeError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if !(0.0..=1.0).contains(&self.survival_rate) {
            return Err(LifeError::InvalidSurvivalRate(self.survival_rate));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(50, 50, 0.33, Duration::from_millis(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = SimulationConfig::default().with_seed(11);
        let (mut a, mut b) = (config.rng(), config.rng());
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn rejects_bad_dimensions() {
        let config = SimulationConfig::new(0, 10, 0.5, Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(LifeError::InvalidDimensions { height: 0, width: 10 })
        );
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = SimulationConfig::new(3, 3, rate, Duration::ZERO);
            assert!(
                matches!(config.validate(), Err(LifeError::InvalidSurvivalRate(_))),
                "rate {rate}"
            );
        }
        for rate in [0.0, 0.5, 1.0] {
            assert!(SimulationConfig::new(3, 3, rate, Duration::ZERO).validate().is_ok());
        }
    }
}
