//! List command implementation.
//!
//! The `repohealth list` command prints the active check table without
//! running anything.

use std::path::{Path, PathBuf};

use crate::checks::CheckSpec;
use crate::cli::args::ListArgs;
use crate::config::{load_config, CheckGroup};
use crate::error::{HealthError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
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
}

fn spec_line(spec: &CheckSpec) -> String {
    format!(
        "  [{}] {}: {}",
        spec.kind().as_str(),
        spec.description(),
        spec.target()
    )
}

fn group_title(group: &CheckGroup) -> String {
    let count = counted(group.checks.len(), "check");
    match &group.icon {
        Some(icon) => format!("{} {} ({})", icon, group.name, count),
        None => format!("{} ({})", group.name, count),
    }
}

/// `1 check`, `2 checks`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = load_config(&self.project_root, self.config_path.as_deref())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| HealthError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Check table: {}", source));

        for group in &config.groups {
            ui.message("");
            ui.show_header(&group_title(group));
            for spec in &group.checks {
                ui.message(&spec_line(spec));
            }
        }

        ui.message("");
        ui.message(&format!(
            "{} in {}",
            counted(config.total_checks(), "check"),
            counted(config.groups.len(), "group")
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_builtin_table() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path(), ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Check table: built-in defaults"));
        assert!(ui.has_message("28 checks in 6 groups"));
        assert!(ui.has_message("  [dir] Source directory: src"));
        assert!(ui.headers().iter().any(|h| h == "📁 Project Structure (7 checks)"));
    }

    #[test]
    fn lists_project_table() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".repohealth.yml"),
            "groups:\n  - name: Git\n    checks:\n      - type: command\n        command: git status\n        description: Repository readable\n",
        )
        .unwrap();
        let cmd = ListCommand::new(temp.path(), ListArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), &["Git (1 check)".to_string()]);
        assert!(ui.has_message("  [command] Repository readable: git status"));
        assert!(ui.has_message("1 check in 1 group"));
    }

    #[test]
    fn counts_are_pluralized() {
        assert_eq!(counted(0, "group"), "0 groups");
        assert_eq!(counted(1, "check"), "1 check");
        assert_eq!(counted(2, "check"), "2 checks");
    }

    #[test]
    fn json_mode_prints_nothing_through_ui() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path(), ListArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().is_empty());
    }
}
