//! The check aggregator.
//!
//! [`HealthRunner`] drives every selected group in declaration order, runs
//! each check once, prints its line, and folds the results into a
//! [`HealthReport`].

use std::path::Path;
use std::time::Duration;

use crate::checks::{CheckContext, CheckKind};
use crate::config::{CheckGroup, HealthConfig};
use crate::error::{HealthError, Result};
use crate::ui::{StatusKind, UserInterface};

use super::health::{HealthReport, ReportBuilder};
use super::render;

/// Runs a check table and produces a report.
pub struct HealthRunner<'a> {
    config: &'a HealthConfig,
    groups: Vec<&'a CheckGroup>,
    context: CheckContext,
}

impl<'a> HealthRunner<'a> {
    /// Create a runner for every group in `config`.
    pub fn new(config: &'a HealthConfig, project_root: &Path) -> Self {
        let context = CheckContext::new(project_root, "")
            .with_command_timeout(config.settings.command_timeout())
            .with_file_kind(config.settings.file_kind);

        Self {
            config,
            groups: config.groups.iter().collect(),
            context,
        }
    }

    /// Override the configured command deadline. `None` keeps the config value.
    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        if timeout.is_some() {
            self.context = self.context.with_command_timeout(timeout);
        }
        self
    }

    /// Restrict the run to the named groups, keeping declaration order.
    ///
    /// An empty list selects every group.
    ///
    /// # Errors
    ///
    /// Returns `UnknownGroup` for the first name that matches no group.
    pub fn only_groups(mut self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self);
        }

        if let Some(unknown) = names.iter().find(|n| self.config.group(n).is_none()) {
            return Err(HealthError::UnknownGroup {
                name: unknown.clone(),
            });
        }

        self.groups = self
            .config
            .groups
            .iter()
            .filter(|g| names.iter().any(|n| g.name.eq_ignore_ascii_case(n)))
            .collect();
        Ok(self)
    }

    /// Groups that will run, in order.
    pub fn groups(&self) -> &[&'a CheckGroup] {
        &self.groups
    }

    /// Number of checks that will run.
    pub fn total_checks(&self) -> usize {
        self.groups.iter().map(|g| g.checks.len()).sum()
    }

    /// Run every selected check once, in order, reporting to `ui`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> HealthReport {
        let mode = ui.output_mode();
        let show_checks = mode.shows_checks();
        let verbose = mode.shows_details();
        let title = self.config.display_title();

        tracing::info!(
            "Running {} checks in {} groups",
            self.total_checks(),
            self.groups.len()
        );

        if show_checks {
            ui.message(&render::title_line(title));
            ui.message(&render::rule());
        }

        let mut builder = ReportBuilder::new(title);

        for group in &self.groups {
            let ctx = self.context.for_category(&group.name);
            builder.begin_group(&group.name);

            if show_checks {
                ui.message("");
                ui.show_header(&render::group_header(group));
            }

            for spec in &group.checks {
                let spinner = (show_checks && spec.kind() == CheckKind::Command)
                    .then(|| ui.start_spinner(&format!("Running {}...", spec.description())));

                let result = spec.evaluate(&ctx);

                if let Some(mut spinner) = spinner {
                    spinner.finish_clear();
                }

                tracing::debug!(
                    "[{}] {} -> {}",
                    group.name,
                    result.name,
                    if result.passed { "pass" } else { "fail" }
                );

                if show_checks {
                    let kind = if result.passed {
                        StatusKind::Pass
                    } else {
                        StatusKind::Fail
                    };
                    ui.status_line(kind, &render::check_line(&result, verbose));

                    if verbose && !result.passed {
                        if let Some(output) = &result.output {
                            for line in render::output_block(output) {
                                ui.message(&line);
                            }
                        }
                    }
                }

                builder.record(result);
            }
        }

        if builder.total() == 0 {
            tracing::warn!("No checks configured");
            ui.warning("No checks configured");
        }

        let report = builder.finish();

        for line in render::summary_lines(&report) {
            ui.message(&line);
        }
        ui.status_line(report.status.kind(), &render::status_line(&report));

        tracing::info!(
            "Health {} ({}/{} passed, {})",
            report.status,
            report.passed_checks,
            report.total_checks,
            report.formatted_rate()
        );

        report
    }
}
