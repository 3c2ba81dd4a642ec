//! Sports walker athletic profile.

use workouts::models::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Brisk walking sits around 5.5 km/h; racewalkers reach 12+ km/h.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 5.5,
            variance: 0.1,
        }
    }
}

impl WalkerProfile {
    /// Creates a racewalker profile.
    pub fn racewalker() -> Self {
        Self {
            base_speed: 12.5,
            variance: 0.05,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_racewalker_is_faster() {
        let racewalker = WalkerProfile::racewalker();
        assert!(racewalker.base_speed_kmh() > WalkerProfile::default().base_speed_kmh());
        assert_eq!(WalkerProfile::default().kind(), ActivityKind::SportsWalking);
    }
}
