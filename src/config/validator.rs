//! Configuration validation rules.
//!
//! This module validates a check table before anything runs:
//! - Groups must have unique, non-empty names
//! - Every check must have a description and a path or command
//! - A command timeout, if set, must be positive and at most one day
//!
//! An empty table is valid; the report guards the zero-check case.

use crate::config::schema::{HealthConfig, MAX_COMMAND_TIMEOUT_SECS};
use crate::error::{HealthError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Group name if error is group-specific
    pub group: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String, group: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            group: group.map(str::to_string),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &HealthConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_settings(config));
    errors.extend(validate_groups(config));

    errors
}

fn validate_settings(config: &HealthConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match config.settings.command_timeout {
        Some(0) => errors.push(ValidationError::new(
            "zero-timeout",
            "settings.command_timeout must be greater than 0".to_string(),
            None,
        )),
        Some(secs) if secs > MAX_COMMAND_TIMEOUT_SECS => errors.push(ValidationError::new(
            "timeout-too-large",
            format!(
                "settings.command_timeout must be at most {} seconds",
                MAX_COMMAND_TIMEOUT_SECS
            ),
            None,
        )),
        _ => {}
    }

    errors
}

fn validate_groups(config: &HealthConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, group) in config.groups.iter().enumerate() {
        let name = group.name.trim();

        if name.is_empty() {
            errors.push(ValidationError::new(
                "missing-group-name",
                format!("Group #{} has no name", idx + 1),
                None,
            ));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                "duplicate-group",
                format!("Group '{}' is defined more than once", name),
                Some(name),
            ));
        }

        for (check_idx, check) in group.checks.iter().enumerate() {
            let label = format!("Check #{} in group '{}'", check_idx + 1, name);

            if check.description().trim().is_empty() {
                errors.push(ValidationError::new(
                    "missing-description",
                    format!("{} has no description", label),
                    Some(name),
                ));
            }

            if check.target().trim().is_empty() {
                let field = if check.kind().is_filesystem() {
                    "path"
                } else {
                    "command"
                };
                errors.push(ValidationError::new(
                    "missing-target",
                    format!("{} has an empty '{}'", label, field),
                    Some(name),
                ));
            }
        }
    }

    errors
}

/// Validate a configuration, folding all errors into one.
pub fn validate(config: &HealthConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(HealthError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
