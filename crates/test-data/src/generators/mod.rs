//! Generators for test input.
//!
//! - [`PackageGenerator`]: Generate sensor packages from athlete profiles

pub mod package;

pub use package::PackageGenerator;
