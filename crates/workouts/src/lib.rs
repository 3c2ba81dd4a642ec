//! Workout metrics for running, sports walking and swimming.
//!
//! Sensor packages arrive as a tag plus positional readings. Each package is
//! dispatched to a [`models::Workout`] variant, scored into a
//! [`models::Report`] and rendered as one text line.
//!
//! ```rust
//! use workouts::{models::SensorPackage, process_package};
//!
//! let line = process_package(&SensorPackage::new("RUN", [15000.0, 1.0, 75.0])).unwrap();
//! assert!(line.contains("Running"));
//! ```

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod formulas;
pub mod models;
pub mod report;

use std::io::Write;

use tracing::{debug, info};

use crate::{
    dispatch::create_activity, errors::WorkoutError, formulas::score_workout,
    models::SensorPackage, report::format_report,
};

/// Readings the driver processes, in output order.
pub const DEFAULT_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn default_packages() -> Vec<SensorPackage> {
    DEFAULT_PACKAGES
        .iter()
        .map(|(tag, args)| SensorPackage::new(*tag, *args))
        .collect()
}

/// Dispatches, scores and formats a single package.
pub fn process_package(package: &SensorPackage) -> Result<String, WorkoutError> {
    let workout = create_activity(&package.tag, &package.args)?;
    let report = score_workout(&workout);
    debug!(?report, "Scored workout");
    Ok(format_report(&report))
}

/// Writes one report line per package, in order. Stops at the first package
/// that cannot be dispatched.
pub fn run_packages(packages: &[SensorPackage], out: &mut impl Write) -> anyhow::Result<()> {
    for package in packages {
        let line = process_package(package)?;
        writeln!(out, "{line}")?;
    }
    info!("Processed {} packages", packages.len());
    Ok(())
}
