//! Fixed constants for workout formulas and report rendering.
//!
//! Nothing here is read from the environment. Every value is a compile-time
//! constant shared by all workouts of a given kind.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Length of one step in meters, shared by running and walking.
pub const LEN_STEP: f64 = 0.65;

/// Constants for the running calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningConstants {
    pub step_length: f64,
    /// Multiplier applied to mean speed.
    pub speed_factor: f64,
    /// Subtracted from the scaled mean speed.
    pub speed_shift: f64,
}

/// Constants for the sports walking calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingConstants {
    pub step_length: f64,
    /// Calories per kilogram per minute of walking.
    pub weight_factor: f64,
    /// Multiplier for the speed-over-height term.
    pub height_factor: f64,
}

/// Constants for the swimming calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingConstants {
    /// Length of one stroke in meters.
    pub step_length: f64,
    /// Added to mean speed before scaling.
    pub speed_shift: f64,
    pub calories_factor: f64,
}

pub const RUNNING: RunningConstants = RunningConstants {
    step_length: LEN_STEP,
    speed_factor: 18.0,
    speed_shift: 20.0,
};

pub const WALKING: WalkingConstants = WalkingConstants {
    step_length: LEN_STEP,
    weight_factor: 0.035,
    height_factor: 0.029,
};

pub const SWIMMING: SwimmingConstants = SwimmingConstants {
    step_length: 1.38,
    speed_shift: 1.1,
    calories_factor: 2.0,
};

/// Display strings used when rendering a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub training_type: &'static str,
    pub duration: &'static str,
    pub distance: &'static str,
    pub speed: &'static str,
    pub calories: &'static str,
    pub hours_unit: &'static str,
    pub distance_unit: &'static str,
    pub speed_unit: &'static str,
}

impl ReportLabels {
    pub const RUSSIAN: ReportLabels = ReportLabels {
        training_type: "Тип тренировки",
        duration: "Длительность",
        distance: "Дистанция",
        speed: "Ср. скорость",
        calories: "Потрачено ккал",
        hours_unit: "ч.",
        distance_unit: "км",
        speed_unit: "км/ч",
    };

    pub const ENGLISH: ReportLabels = ReportLabels {
        training_type: "Training type",
        duration: "Duration",
        distance: "Distance",
        speed: "Avg. speed",
        calories: "Calories burned",
        hours_unit: "h.",
        distance_unit: "km",
        speed_unit: "km/h",
    };
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::RUSSIAN
    }
}

/// Message carried by an unknown activity type error.
pub const UNKNOWN_TRAINING: &str = "Указанный тип тренировки не задан.";
