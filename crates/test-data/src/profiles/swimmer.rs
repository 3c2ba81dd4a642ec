//! Swimmer athletic profile.

use workouts::models::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// - Base speed: ~2.4 km/h (2:30/100m)
/// - Variance: ±12%, swimming pace swings more with fatigue
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.4,
            variance: 0.12,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile from a pace per 100 meters.
    pub fn with_pace_per_100m(minutes: f64) -> Self {
        Self {
            base_speed: 6.0 / minutes,
            ..Default::default()
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
