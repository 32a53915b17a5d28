//! Check specifications and their evaluation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::command::check_command_succeeds;
use super::filesystem::{check_dir_exists, check_file_exists};
use super::result::{CheckKind, CheckResult};

/// A single configured check.
///
/// In YAML each spec is a mapping tagged by `type`:
///
/// ```yaml
/// - type: file
///   path: README.md
///   description: Project documentation
/// - type: command
///   command: git submodule status
///   description: Submodules initialized
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckSpec {
    /// Passes if `path` is an existing file.
    #[serde(rename = "file")]
    FileExists { path: String, description: String },

    /// Passes if `path` is an existing directory.
    #[serde(rename = "dir")]
    DirExists { path: String, description: String },

    /// Passes if `command` exits with code 0.
    #[serde(rename = "command")]
    CommandSucceeds { command: String, description: String },
}

impl CheckSpec {
    /// Create a file-existence check.
    pub fn file(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self::FileExists {
            path: path.into(),
            description: description.into(),
        }
    }

    /// Create a directory-existence check.
    pub fn dir(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self::DirExists {
            path: path.into(),
            description: description.into(),
        }
    }

    /// Create a command-success check.
    pub fn command(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self::CommandSucceeds {
            command: command.into(),
            description: description.into(),
        }
    }

    /// Human-readable description shown in the report.
    pub fn description(&self) -> &str {
        match self {
            Self::FileExists { description, .. }
            | Self::DirExists { description, .. }
            | Self::CommandSucceeds { description, .. } => description,
        }
    }

    /// The path or command text this check probes.
    pub fn target(&self) -> &str {
        match self {
            Self::FileExists { path, .. } | Self::DirExists { path, .. } => path,
            Self::CommandSucceeds { command, .. } => command,
        }
    }

    /// What this check probes.
    pub fn kind(&self) -> CheckKind {
        match self {
            Self::FileExists { .. } => CheckKind::File,
            Self::DirExists { .. } => CheckKind::Dir,
            Self::CommandSucceeds { .. } => CheckKind::Command,
        }
    }

    /// Run the check.
    pub fn evaluate(&self, ctx: &CheckContext) -> CheckResult {
        tracing::debug!(
            "Evaluating {:?} check '{}' ({})",
            self.kind(),
            self.description(),
            self.target()
        );

        match self {
            Self::FileExists { path, description } => check_file_exists(path, description, ctx),
            Self::DirExists { path, description } => check_dir_exists(path, description, ctx),
            Self::CommandSucceeds {
                command,
                description,
            } => check_command_succeeds(command, description, ctx),
        }
    }
}

/// How strictly [`CheckSpec::FileExists`] interprets "file".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// The entry must be a regular file.
    #[default]
    Regular,
    /// Any existing entry passes.
    Any,
}

/// Everything a check needs to know about where and how to run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Directory relative paths and commands are resolved against.
    pub project_root: PathBuf,

    /// Name of the group being run.
    pub category: String,

    /// Deadline for command checks.
    pub command_timeout: Option<Duration>,

    /// File check strictness.
    pub file_kind: FileKind,
}

impl CheckContext {
    /// Create a context with no command deadline and strict file checks.
    pub fn new(project_root: &Path, category: impl Into<String>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            category: category.into(),
            command_timeout: None,
            file_kind: FileKind::default(),
        }
    }

    /// Set the command deadline.
    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set file check strictness.
    pub fn with_file_kind(mut self, file_kind: FileKind) -> Self {
        self.file_kind = file_kind;
        self
    }

    /// The same settings for a different group.
    pub fn for_category(&self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self.clone()
        }
    }
}
