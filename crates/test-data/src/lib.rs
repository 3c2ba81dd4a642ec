//! Test data generation for workouts.
//!
//! This crate produces realistic sensor packages for running, sports walking
//! and swimming, to exercise the workout formulas over more than the handful
//! of fixed readings the driver ships with.
//!
//! # Quick Start
//!
//! ```rust
//! use test_data::prelude::*;
//!
//! let packages = PackageGenerator::with_config(GenerateConfig {
//!     package_count: 10,
//!     ..Default::default()
//! })
//! .generate_seeded();
//! assert_eq!(packages.len(), 10);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::models::{ActivityKind, SensorPackage};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{GenerateConfig, Measurement};
    pub use crate::generators::PackageGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, default_profiles,
        sample_variance,
    };
    pub use crate::{ActivityKind, SensorPackage};
}
