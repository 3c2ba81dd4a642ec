//! Configuration types for sensor package generation.

use serde::{Deserialize, Serialize};

/// Mean and standard deviation of a normally distributed body measurement,
/// clamped to a plausible range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Measurement {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Measurement {
    pub const fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Samples a value, falling back to the mean when the distribution is degenerate.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        use rand_distr::{Distribution, Normal};

        match Normal::new(self.mean, self.std_dev) {
            Ok(normal) => normal.sample(rng).clamp(self.min, self.max),
            Err(_) => self.mean,
        }
    }
}

/// Configuration for generating sensor packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Seed for reproducible output.
    pub seed: u64,

    /// Workout duration range in hours.
    pub duration_hours: (f64, f64),

    /// Body weight in kilograms.
    pub weight_kg: Measurement,

    /// Body height in centimeters (walking packages only).
    pub height_cm: Measurement,

    /// Pool lengths in meters to pick from (swimming packages only).
    pub pool_lengths: Vec<f64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package_count: 30,
            seed: 12345,
            duration_hours: (0.25, 2.0),
            weight_kg: Measurement::new(72.0, 12.0, 45.0, 130.0),
            height_cm: Measurement::new(172.0, 9.0, 145.0, 205.0),
            pool_lengths: vec![25.0, 50.0],
        }
    }
}
