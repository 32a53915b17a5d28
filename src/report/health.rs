//! Health report accumulation.
//!
//! A [`ReportBuilder`] collects results group by group as they arrive;
//! [`ReportBuilder::finish`] derives the rate and status exactly once.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::CheckResult;

use super::status::{success_rate, HealthStatus};

/// Results for one group, in check order.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Group name.
    pub name: String,
    /// Results in declaration order.
    pub results: Vec<CheckResult>,
}

impl GroupReport {
    /// Number of passing results in this group.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }
}

/// The finalized outcome of one full run.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// Report title (project name).
    pub title: String,
    /// When the run started.
    pub generated_at: DateTime<Utc>,
    /// Total number of checks run.
    pub total_checks: usize,
    /// Number of checks that passed.
    pub passed_checks: usize,
    /// Number of checks that failed.
    pub failed_checks: usize,
    /// `passed / total * 100`, or 0.0 when nothing ran.
    pub success_rate: f64,
    /// Verdict derived from `success_rate`.
    pub status: HealthStatus,
    /// Per-group results.
    pub groups: Vec<GroupReport>,
}

impl HealthReport {
    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// All results in run order.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.groups.iter().flat_map(|g| g.results.iter())
    }

    /// Success rate to one decimal place, truncated so a report with any
    /// failure never reads `100.0%`.
    pub fn formatted_rate(&self) -> String {
        let tenths = if self.total_checks == 0 {
            0
        } else {
            self.passed_checks * 1000 / self.total_checks
        };
        format!("{}.{}%", tenths / 10, tenths % 10)
    }
}

/// Running totals for an in-progress run.
#[derive(Debug)]
pub struct ReportBuilder {
    title: String,
    started_at: DateTime<Utc>,
    groups: Vec<GroupReport>,
    total: usize,
    passed: usize,
}

impl ReportBuilder {
    /// Start a new report.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            started_at: Utc::now(),
            groups: Vec::new(),
            total: 0,
            passed: 0,
        }
    }

    /// Open a new group; subsequent results are recorded under it.
    pub fn begin_group(&mut self, name: impl Into<String>) {
        self.groups.push(GroupReport {
            name: name.into(),
            results: Vec::new(),
        });
    }

    /// Record one result and update the running totals.
    ///
    /// Results recorded before any group is opened go into a group named
    /// after the result's category.
    pub fn record(&mut self, result: CheckResult) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
        }

        if self.groups.is_empty() {
            self.begin_group(result.category.clone());
        }
        if let Some(group) = self.groups.last_mut() {
            group.results.push(result);
        }
    }

    /// Checks recorded so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Passing checks recorded so far.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Compute the rate and status and freeze the report.
    pub fn finish(self) -> HealthReport {
        let success_rate = success_rate(self.passed, self.total);
        HealthReport {
            title: self.title,
            generated_at: self.started_at,
            total_checks: self.total,
            passed_checks: self.passed,
            failed_checks: self.total - self.passed,
            success_rate,
            status: HealthStatus::from_rate(success_rate),
            groups: self.groups,
        }
    }
}
