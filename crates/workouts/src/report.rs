//! Human-readable rendering of workout reports.

use std::fmt;

use crate::config::ReportLabels;
use crate::models::Report;

/// Renders a report with the default labels.
pub fn format_report(report: &Report) -> String {
    format_report_with(report, &ReportLabels::default())
}

/// Renders a report as a single line. Every number gets three decimals.
pub fn format_report_with(report: &Report, labels: &ReportLabels) -> String {
    format!(
        "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
        labels.training_type,
        report.training_type,
        labels.duration,
        report.duration,
        labels.hours_unit,
        labels.distance,
        report.distance,
        labels.distance_unit,
        labels.speed,
        report.speed,
        labels.speed_unit,
        labels.calories,
        report.calories,
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report(self))
    }
}
