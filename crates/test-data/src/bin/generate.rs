//! Generates sensor packages and prints each with its report as a JSON line.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate
//! ```
//!
//! `GENERATE_COUNT` overrides the number of packages.

use serde_json::json;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;
use workouts::{dispatch::create_activity, formulas::score_workout, report::format_report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GenerateConfig::default();
    if let Ok(count) = std::env::var("GENERATE_COUNT") {
        config.package_count = count.parse()?;
    }

    let packages = PackageGenerator::with_config(config).generate_seeded();

    for package in &packages {
        let workout = create_activity(&package.tag, &package.args)?;
        let report = score_workout(&workout);
        let line = json!({
            "package": package,
            "report": report,
            "message": format_report(&report),
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    tracing::info!("Generated {} packages", packages.len());

    Ok(())
}
