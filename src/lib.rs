//! repohealth - Repository health checks.
//!
//! repohealth runs a table of existence and command checks against a
//! project, prints a sectioned report, and scores the result as
//! EXCELLENT, GOOD, FAIR, or POOR. The exit code is 0 for a healthy
//! verdict and 1 otherwise, so CI can gate on it.
//!
//! # Modules
//!
//! - [`checks`] - File, directory, and command check primitives
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check-table loading, defaults, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Aggregation, scoring, and report rendering
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, spinners, and test doubles
//!
//! # Example
//!
//! ```
//! use repohealth::config::builtin_config;
//! use repohealth::report::{HealthRunner, HealthStatus};
//! use repohealth::ui::{MockUI, OutputMode};
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! let config = builtin_config();
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//!
//! let report = HealthRunner::new(&config, project.path())
//!     .only_groups(&["Project Structure".to_string()])
//!     .unwrap()
//!     .run(&mut ui);
//!
//! assert_eq!(report.total_checks, 7);
//! assert_eq!(report.status, HealthStatus::Poor);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{HealthError, Result};
