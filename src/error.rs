//! Error types for repohealth operations.
//!
//! This module defines [`HealthError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed check is never an error: missing files and non-zero exits are
//!   ordinary [`CheckResult`](crate::checks::CheckResult) values
//! - Use `HealthError` for conditions that stop a run before a verdict
//! - Use `anyhow::Error` (via `HealthError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for repohealth operations.
#[derive(Debug, Error)]
pub enum HealthError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A `--group` filter named a group that is not configured.
    #[error("Unknown check group: {name}")]
    UnknownGroup { name: String },

    /// Shell command could not be launched or awaited.
    #[error("Command failed to run: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for repohealth operations.
pub type Result<T> = std::result::Result<T, HealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = HealthError::ConfigNotFound {
            path: PathBuf::from("/foo/.repohealth.yml"),
        };
        assert!(err.to_string().contains("/foo/.repohealth.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = HealthError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = HealthError::ConfigValidationError {
            message: "group 1 has no name".into(),
        };
        assert!(err.to_string().contains("group 1 has no name"));
    }

    #[test]
    fn unknown_group_displays_name() {
        let err = HealthError::UnknownGroup {
            name: "Docs".into(),
        };
        assert!(err.to_string().contains("Docs"));
    }

    #[test]
    fn command_failed_displays_command_and_message() {
        let err = HealthError::CommandFailed {
            command: "git status".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git status"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HealthError = io_err.into();
        assert!(matches!(err, HealthError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: HealthError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, HealthError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
