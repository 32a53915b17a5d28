//! Human-readable report lines.
//!
//! Pure formatting: every function here returns text and touches no I/O,
//! so the exact report shape is unit-testable.

use std::time::Duration;

use crate::checks::{CheckKind, CheckResult, Failure};
use crate::config::CheckGroup;

use super::health::HealthReport;

/// Width of the `=` rules framing the report.
pub const RULE_WIDTH: usize = 50;

/// A horizontal rule.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// The report title line.
pub fn title_line(title: &str) -> String {
    format!("🔍 {} Health Check", title)
}

/// The header printed before a group's checks.
pub fn group_header(group: &CheckGroup) -> String {
    match &group.icon {
        Some(icon) => format!("{} {}:", icon, group.name),
        None => format!("{}:", group.name),
    }
}

/// The single status line for one check.
///
/// With `show_duration`, the elapsed time is appended in parentheses.
pub fn check_line(result: &CheckResult, show_duration: bool) -> String {
    let icon = if result.passed { "✅" } else { "❌" };
    let outcome = outcome_text(result);

    let line = format!("{} {}: {}", icon, result.name, outcome);
    if show_duration {
        format!("{} ({})", line, format_duration(result.duration()))
    } else {
        line
    }
}

fn outcome_text(result: &CheckResult) -> String {
    let detail = result.detail.as_deref().unwrap_or_default();

    match (result.kind, result.passed, result.failure) {
        (CheckKind::Command, true, _) => "PASS".to_string(),
        (_, true, _) => result.target.clone(),
        (CheckKind::Command, false, Some(Failure::LaunchError)) => format!("ERROR - {}", detail),
        (CheckKind::Command, false, _) => format!("FAIL - {}", detail),
        (CheckKind::File, false, Some(Failure::WrongKind)) => {
            format!("{} (NOT A FILE)", result.target)
        }
        (CheckKind::Dir, false, Some(Failure::WrongKind)) => {
            format!("{} (NOT A DIRECTORY)", result.target)
        }
        (_, false, Some(Failure::Unreadable)) => {
            format!("{} (ERROR - {})", result.target, detail)
        }
        (_, false, _) => format!("{} (MISSING)", result.target),
    }
}

/// Captured command output, indented under its check line.
pub fn output_block(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| format!("    │ {}", line))
        .collect()
}

/// The summary block that closes the report, without the verdict line.
pub fn summary_lines(report: &HealthReport) -> Vec<String> {
    vec![
        String::new(),
        rule(),
        "📊 HEALTH CHECK SUMMARY".to_string(),
        format!("Total Checks: {}", report.total_checks),
        format!("Passed: {}", report.passed_checks),
        format!("Failed: {}", report.failed_checks),
        format!("Success Rate: {}", report.formatted_rate()),
    ]
}

/// The final verdict line.
pub fn status_line(report: &HealthReport) -> String {
    format!(
        "{} Repository health: {}",
        report.status.icon(),
        report.status.label()
    )
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
