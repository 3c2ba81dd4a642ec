use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{RUNNING, SWIMMING, WALKING};

/// Raw reading shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Steps or strokes counted by the sensor.
    pub action: u32,
    /// Duration in hours.
    pub duration: f64,
    /// Body weight in kilograms.
    pub weight: f64,
}

impl WorkoutSample {
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::SportsWalking,
        ActivityKind::Swimming,
    ];

    /// Short tag sensors use to identify the workout.
    pub const fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Name shown in reports.
    pub const fn name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of raw sensor values a package of this kind carries.
    pub const fn arg_count(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Meters covered by one action (step or stroke).
    pub const fn step_length(self) -> f64 {
        match self {
            ActivityKind::Running => RUNNING.step_length,
            ActivityKind::SportsWalking => WALKING.step_length,
            ActivityKind::Swimming => SWIMMING.step_length,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A workout ready for scoring. Each variant carries the fields its formulas need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running {
        sample: WorkoutSample,
    },
    SportsWalking {
        sample: WorkoutSample,
        /// Height in centimeters.
        height: f64,
    },
    Swimming {
        sample: WorkoutSample,
        /// Pool length in meters.
        pool_length: f64,
        /// Number of pool lengths swum.
        laps: u32,
    },
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Running { .. } => ActivityKind::Running,
            Workout::SportsWalking { .. } => ActivityKind::SportsWalking,
            Workout::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    pub fn sample(&self) -> &WorkoutSample {
        match self {
            Workout::Running { sample }
            | Workout::SportsWalking { sample, .. }
            | Workout::Swimming { sample, .. } => sample,
        }
    }
}

/// One entry of sensor input: a workout tag and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub tag: String,
    pub args: Vec<f64>,
}

impl SensorPackage {
    pub fn new(tag: impl Into<String>, args: impl Into<Vec<f64>>) -> Self {
        Self {
            tag: tag.into(),
            args: args.into(),
        }
    }
}

/// Metrics derived from a single workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}
