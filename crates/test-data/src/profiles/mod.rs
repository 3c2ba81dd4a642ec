//! Athletic performance profiles.
//!
//! Profiles define realistic speeds for each workout kind. Package generators
//! use them to turn a duration into a plausible step or stroke count.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::models::ActivityKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout kind the profile produces packages for
/// - Typical speed over the whole workout
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> ActivityKind;

    /// Typical mean speed in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from a normal distribution around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// Number of steps or strokes needed to cover `distance_km` at the kind's step length.
pub fn actions_for_distance(kind: ActivityKind, distance_km: f64) -> u32 {
    (distance_km * 1000.0 / kind.step_length()).round().max(0.0) as u32
}

/// The default profile for every workout kind.
pub fn default_profiles() -> Vec<Box<dyn AthleteProfile>> {
    vec![
        Box::new(RunnerProfile::default()),
        Box::new(WalkerProfile::default()),
        Box::new(SwimmerProfile::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_round_trip_distance() {
        let steps = actions_for_distance(ActivityKind::Running, 6.5);
        assert_eq!(steps, 10000);
    }

    #[test]
    fn test_default_profiles_cover_every_kind() {
        let kinds: Vec<ActivityKind> = default_profiles().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ActivityKind::ALL);
    }

    #[test]
    fn test_variance_is_clamped() {
        let profile = SwimmerProfile::default();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }
}
