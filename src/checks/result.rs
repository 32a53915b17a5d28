//! Check result types.
//!
//! Every primitive produces a [`CheckResult`]: a uniform, immutable record
//! of what was probed and whether it passed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a check probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// A regular file (or any entry, see [`FileKind`](super::FileKind)).
    File,
    /// A directory.
    Dir,
    /// A shell command's exit status.
    Command,
}

impl CheckKind {
    /// Whether this kind probes the filesystem.
    pub fn is_filesystem(self) -> bool {
        matches!(self, Self::File | Self::Dir)
    }

    /// The config `type` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Command => "command",
        }
    }
}

/// Why a check did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    /// Nothing exists at the path.
    Missing,
    /// Something exists at the path, but it is the wrong kind of entry.
    WrongKind,
    /// The path could not be inspected, e.g. permission denied.
    Unreadable,
    /// The command ran and exited non-zero (or was killed by a signal).
    NonZeroExit,
    /// The command exceeded its deadline and was killed.
    TimedOut,
    /// The command could not be launched at all.
    LaunchError,
}

/// The result of running a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Human-readable check name (the check's description).
    pub name: String,

    /// Group the check belongs to.
    pub category: String,

    /// What was probed.
    pub kind: CheckKind,

    /// The path or command text that was probed.
    pub target: String,

    /// Whether the check passed.
    pub passed: bool,

    /// Why the check failed, if it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,

    /// Missing path or captured error text; set when the check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Full captured command output, for verbose display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Wall-clock time spent on the check, in milliseconds.
    pub duration_ms: u64,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(
        name: impl Into<String>,
        category: impl Into<String>,
        kind: CheckKind,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            kind,
            target: target.into(),
            passed: true,
            failure: None,
            detail: None,
            output: None,
            duration_ms: 0,
        }
    }

    /// Create a failing result.
    pub fn fail(
        name: impl Into<String>,
        category: impl Into<String>,
        kind: CheckKind,
        target: impl Into<String>,
        failure: Failure,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            kind,
            target: target.into(),
            passed: false,
            failure: Some(failure),
            detail: Some(detail.into()),
            output: None,
            duration_ms: 0,
        }
    }

    /// Attach captured command output.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        if !output.trim().is_empty() {
            self.output = Some(output);
        }
        self
    }

    /// Record how long the check took.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
