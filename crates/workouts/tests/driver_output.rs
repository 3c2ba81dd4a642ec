//! End-to-end tests for the sensor package driver.
//!
//! These feed packages through dispatch, scoring and formatting and compare
//! the exact lines written.

use workouts::config::ReportLabels;
use workouts::dispatch::create_activity;
use workouts::formulas::score_workout;
use workouts::models::SensorPackage;
use workouts::report::format_report_with;
use workouts::{default_packages, run_packages};

fn run_to_string(packages: &[SensorPackage]) -> String {
    let mut out = Vec::new();
    run_packages(packages, &mut out).expect("Failed to run packages");
    String::from_utf8(out).expect("Output is not UTF-8")
}

#[test]
fn test_default_packages_output() {
    let output = run_to_string(&default_packages());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        [
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn test_report_names_kind_not_tag() {
    let output = run_to_string(&[SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0])]);
    assert!(output.contains("SportsWalking"));
    assert!(!output.contains("WLK"));
}

#[test]
fn test_english_rendering_of_half_hour_run() {
    let workout = create_activity("RUN", &[5000.0, 0.5, 60.0]).expect("Failed to dispatch");
    let line = format_report_with(&score_workout(&workout), &ReportLabels::ENGLISH);

    // 3.25 km in 0.5 h; (18 * 6.5 - 20) * 60 / 1000 * 0.5 * 60 = 174.6
    assert_eq!(
        line,
        "Training type: Running; Duration: 0.500 h.; Distance: 3.250 km; \
         Avg. speed: 6.500 km/h; Calories burned: 174.600."
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let packages = default_packages();
    assert_eq!(run_to_string(&packages), run_to_string(&packages));
}

#[test]
fn test_empty_input_writes_nothing() {
    assert!(run_to_string(&[]).is_empty());
}

#[test]
fn test_report_serializes_with_display_name() {
    let workout = create_activity("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("Failed to dispatch");
    let value = serde_json::to_value(score_workout(&workout)).expect("Failed to serialize");

    assert_eq!(value["training_type"], "Swimming");
    assert_eq!(value["duration"], 1.0);
    assert_eq!(value["speed"], 1.0);
}
