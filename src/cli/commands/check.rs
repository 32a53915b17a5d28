//! Check command implementation.
//!
//! The `repohealth check` command runs the check table and reports a
//! verdict. The exit code follows the verdict: 0 when healthy, 1 otherwise.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::{HealthError, Result};
use crate::report::{HealthReport, HealthRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit check table instead of discovery.
    pub fn with_config_path(mut self, path: Option<&Path>) -> Self {
        self.config_path = path.map(Path::to_path_buf);
        self
    }

    /// Load the table, run it, and return the report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<HealthReport> {
        let (config, source) = load_config(&self.project_root, self.config_path.as_deref())?;
        tracing::debug!("Using check table from {}", source);

        let runner = HealthRunner::new(&config, &self.project_root)
            .with_command_timeout(self.args.timeout.map(Duration::from_secs))
            .only_groups(&self.args.group)?;

        Ok(runner.run(ui))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = if self.args.json {
            // The human report must not interleave with the JSON document.
            let previous = ui.output_mode();
            ui.set_output_mode(OutputMode::Silent);
            let report = self.run(ui);
            ui.set_output_mode(previous);

            let report = report?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| HealthError::Other(e.into()))?;
            println!("{}", json);
            report
        } else {
            self.run(ui)?
        };

        if report.status.is_passing() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}
