//! Distance, speed and calorie formulas for each workout kind.

use crate::config::{M_IN_KM, MIN_IN_H, RUNNING, SWIMMING, WALKING};
use crate::models::{Report, Workout};

impl Workout {
    /// Distance covered in kilometers.
    pub fn distance(&self) -> f64 {
        let sample = self.sample();
        f64::from(sample.action) * self.kind().step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match *self {
            Workout::Swimming {
                sample,
                pool_length,
                laps,
            } => pool_length * f64::from(laps) / M_IN_KM / sample.duration,
            Workout::Running { sample } | Workout::SportsWalking { sample, .. } => {
                self.distance() / sample.duration
            }
        }
    }

    /// Calories spent during the workout.
    pub fn calories_spent(&self) -> f64 {
        match *self {
            Workout::Running { sample } => {
                (RUNNING.speed_factor * self.mean_speed() - RUNNING.speed_shift) * sample.weight
                    / M_IN_KM
                    * sample.duration
                    * MIN_IN_H
            }
            Workout::SportsWalking { sample, height } => {
                // speed² / height is floor-divided; typical walks contribute zero here.
                (self.mean_speed().powi(2) / height).floor() * WALKING.height_factor * sample.weight
                    + WALKING.weight_factor * sample.weight * sample.duration * MIN_IN_H
            }
            Workout::Swimming { sample, .. } => {
                (self.mean_speed() + SWIMMING.speed_shift) * SWIMMING.calories_factor * sample.weight
            }
        }
    }
}

/// Computes every metric of a workout into a report.
pub fn score_workout(workout: &Workout) -> Report {
    Report {
        training_type: workout.kind().name(),
        duration: workout.sample().duration,
        distance: workout.distance(),
        speed: workout.mean_speed(),
        calories: workout.calories_spent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutSample;

    const EPS: f64 = 1e-9;

    fn running() -> Workout {
        Workout::Running {
            sample: WorkoutSample::new(15000, 1.0, 75.0),
        }
    }

    fn walking() -> Workout {
        Workout::SportsWalking {
            sample: WorkoutSample::new(9000, 1.0, 75.0),
            height: 180.0,
        }
    }

    fn swimming() -> Workout {
        Workout::Swimming {
            sample: WorkoutSample::new(720, 1.0, 80.0),
            pool_length: 25.0,
            laps: 40,
        }
    }

    #[test]
    fn test_running_metrics() {
        let workout = running();
        assert!((workout.distance() - 9.75).abs() < EPS);
        assert!((workout.mean_speed() - 9.75).abs() < EPS);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((workout.calories_spent() - 699.75).abs() < EPS);
    }

    #[test]
    fn test_walking_floors_speed_term() {
        let workout = walking();
        assert!((workout.distance() - 5.85).abs() < EPS);
        assert!((workout.mean_speed() - 5.85).abs() < EPS);
        // 5.85² / 180 ≈ 0.19 floors to 0, leaving only the weight term.
        assert!((workout.calories_spent() - 157.5).abs() < EPS);
    }

    #[test]
    fn test_walking_speed_term_counts_once_above_height() {
        // 13 km/h over 1 h for a 100 cm walker: 169 / 100 floors to 1.
        let workout = Workout::SportsWalking {
            sample: WorkoutSample::new(20000, 1.0, 50.0),
            height: 100.0,
        };
        assert!((workout.mean_speed() - 13.0).abs() < EPS);
        let expected = 1.0 * 0.029 * 50.0 + 0.035 * 50.0 * 60.0;
        assert!((workout.calories_spent() - expected).abs() < EPS);
    }

    #[test]
    fn test_swimming_uses_pool_for_speed() {
        let workout = swimming();
        // Distance still comes from strokes.
        assert!((workout.distance() - 0.9936).abs() < EPS);
        assert!((workout.mean_speed() - 1.0).abs() < EPS);
        assert!((workout.calories_spent() - 336.0).abs() < EPS);
    }

    #[test]
    fn test_score_workout_uses_display_name() {
        let report = score_workout(&walking());
        assert_eq!(report.training_type, "SportsWalking");
        assert_eq!(report.duration, 1.0);
        assert!((report.calories - 157.5).abs() < EPS);
    }

    #[test]
    fn test_score_is_bit_identical() {
        for workout in [running(), walking(), swimming()] {
            let first = score_workout(&workout);
            let second = score_workout(&workout);
            assert_eq!(first.distance.to_bits(), second.distance.to_bits());
            assert_eq!(first.speed.to_bits(), second.speed.to_bits());
            assert_eq!(first.calories.to_bits(), second.calories.to_bits());
        }
    }

    #[test]
    fn test_zero_action_gives_zero_distance() {
        let workout = Workout::Running {
            sample: WorkoutSample::new(0, 0.5, 70.0),
        };
        assert_eq!(workout.distance(), 0.0);
        assert_eq!(workout.mean_speed(), 0.0);
    }
}
