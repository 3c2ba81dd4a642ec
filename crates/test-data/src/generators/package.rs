//! Sensor package generation from athlete profiles.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use workouts::models::{ActivityKind, SensorPackage};

use crate::config::GenerateConfig;
use crate::profiles::{AthleteProfile, actions_for_distance, default_profiles, sample_variance};

const FALLBACK_POOL_LENGTH: f64 = 25.0;

/// Generates realistic sensor packages for testing.
pub struct PackageGenerator {
    config: GenerateConfig,
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: GenerateConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generates a single package for the profile's workout kind.
    pub fn generate(&self, profile: &dyn AthleteProfile, rng: &mut impl Rng) -> SensorPackage {
        let kind = profile.kind();
        let (min_hours, max_hours) = self.config.duration_hours;
        let duration = round_to(rng.gen_range(min_hours..=max_hours), 2);
        let weight = round_to(self.config.weight_kg.sample(rng), 1);
        let speed = profile.base_speed_kmh() * sample_variance(profile, rng);

        let args = match kind {
            ActivityKind::Running => {
                let action = actions_for_distance(kind, speed * duration);
                vec![f64::from(action), duration, weight]
            }
            ActivityKind::SportsWalking => {
                let action = actions_for_distance(kind, speed * duration);
                let height = self.config.height_cm.sample(rng).round();
                vec![f64::from(action), duration, weight, height]
            }
            ActivityKind::Swimming => {
                let pool_length = self
                    .config
                    .pool_lengths
                    .choose(rng)
                    .copied()
                    .unwrap_or(FALLBACK_POOL_LENGTH);
                let laps = (speed * duration * 1000.0 / pool_length).round().max(1.0);
                let action = actions_for_distance(kind, laps * pool_length / 1000.0);
                vec![f64::from(action), duration, weight, pool_length, laps]
            }
        };

        SensorPackage::new(kind.tag(), args)
    }

    /// Generates packages, picking a random profile for each one.
    pub fn generate_batch(
        &self,
        profiles: &[Box<dyn AthleteProfile>],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<SensorPackage> {
        (0..count)
            .filter_map(|_| {
                let profile = profiles.choose(rng)?;
                Some(self.generate(profile.as_ref(), rng))
            })
            .collect()
    }

    /// Generates the configured number of packages from the configured seed.
    pub fn generate_seeded(&self) -> Vec<SensorPackage> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.generate_batch(&default_profiles(), self.config.package_count, &mut rng)
    }
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
