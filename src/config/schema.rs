//! Configuration schema definitions.
//!
//! These structs map to the YAML check-table file format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::checks::{CheckSpec, FileKind};

/// Largest accepted command deadline, in seconds (one day).
pub const MAX_COMMAND_TIMEOUT_SECS: u64 = 86_400;

/// Root configuration structure for `.repohealth.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Project name shown in the report title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Check groups, run in declaration order.
    pub groups: Vec<CheckGroup>,
}

impl HealthConfig {
    /// Total number of checks across all groups.
    pub fn total_checks(&self) -> usize {
        self.groups.iter().map(|g| g.checks.len()).sum()
    }

    /// Find a group by name, ignoring case.
    pub fn group(&self, name: &str) -> Option<&CheckGroup> {
        self.groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    /// Display title for the report.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Repository")
    }
}

/// Settings that apply to every check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deadline for each command check, in seconds. Unset means no deadline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout: Option<u64>,

    /// Whether file checks require a regular file or any entry.
    pub file_kind: FileKind,
}

impl Settings {
    /// The command deadline as a [`Duration`].
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout.map(Duration::from_secs)
    }
}

/// A named, ordered collection of related checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckGroup {
    /// Group name, used as the result category.
    pub name: String,

    /// Glyph printed before the group header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Checks in this group, run in declaration order.
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

impl CheckGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            checks: Vec::new(),
        }
    }

    /// Set the header glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a check.
    pub fn with_check(mut self, check: CheckSpec) -> Self {
        self.checks.push(check);
        self
    }
}
