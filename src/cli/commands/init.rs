//! Init command implementation.
//!
//! The `repohealth init` command writes the built-in check table to
//! `.repohealth.yml` so a project can start editing it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{builtin_config, CONFIG_FILE};
use crate::error::{HealthError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Where the config will be written.
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE)
    }

    /// Render the built-in table as a commented YAML document.
    fn render_config(&self) -> Result<String> {
        let mut config = builtin_config();
        config.title = self
            .project_root
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);

        let body = serde_yaml::to_string(&config).map_err(|e| HealthError::Other(e.into()))?;

        Ok(format!(
            "# repohealth check table\n\
             #\n\
             # Check types:\n\
             #   - type: dir       path: <relative path>\n\
             #   - type: file      path: <relative path>\n\
             #   - type: command   command: <shell command>\n\
             #\n\
             # Set settings.command_timeout (seconds) to bound command checks.\n\
             \n\
             {}",
            body
        ))
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.config_path();

        if path.exists() && !self.args.force {
            ui.error(&format!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        fs::write(&path, self.render_config()?)?;
        tracing::info!("Wrote {}", path.display());

        ui.success(&format!("Created {}", CONFIG_FILE));
        ui.message("Edit the groups to match your project, then run 'repohealth check'.");

        Ok(CommandResult::success())
    }
}
