//! Check-table configuration.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - The built-in table in [`defaults`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use repohealth::config::{load_config, ConfigSource, CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(CONFIG_FILE),
//!     "groups:\n  - name: Docs\n    checks:\n      - type: file\n        path: README.md\n        description: Readme\n",
//! )
//! .unwrap();
//!
//! let (config, source) = load_config(temp.path(), None).unwrap();
//! assert!(matches!(source, ConfigSource::Project(_)));
//! assert_eq!(config.total_checks(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! The first match wins:
//! 1. `--config PATH`
//! 2. `.repohealth.yml` in the project root
//! 3. `.repohealth/config.yml` in the project root
//! 4. The built-in table

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::builtin_config;
pub use loader::{
    find_project_config, find_project_root, load_config, load_config_file, parse_config,
    ConfigSource, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{CheckGroup, HealthConfig, Settings, MAX_COMMAND_TIMEOUT_SECS};
pub use validator::{validate, validate_config, ValidationError};
