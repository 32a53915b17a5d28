//! Configuration file discovery and loading.
//!
//! This module decides which check table a run uses: an explicit
//! `--config` file, a project config, or the built-in defaults.

use crate::config::defaults::builtin_config;
use crate::config::schema::HealthConfig;
use crate::config::validator::validate;
use crate::error::{HealthError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name at the project root.
pub const CONFIG_FILE: &str = ".repohealth.yml";

/// Project config directory; holds `config.yml`.
pub const CONFIG_DIR: &str = ".repohealth";

/// Where the active check table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Discovered in the project root.
    Project(PathBuf),
    /// No file found; the built-in table.
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Project(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in defaults"),
        }
    }
}

/// Find a project config file.
///
/// Checks `.repohealth.yml`, then `.repohealth/config.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let file = project_root.join(CONFIG_FILE);
    if file.is_file() {
        return Some(file);
    }

    let nested = project_root.join(CONFIG_DIR).join("config.yml");
    if nested.is_file() {
        return Some(nested);
    }

    None
}

/// Find the project root by walking up from `start`.
///
/// Looks for, in each directory:
/// 1. `.repohealth.yml` or `.repohealth/` (primary indicator)
/// 2. `.git` (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() || current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<HealthConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HealthError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HealthError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`HealthConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<HealthConfig> {
    // An empty file means "no checks", not a parse error.
    if content.trim().is_empty() {
        return Ok(HealthConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| HealthError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the check table for a project.
///
/// If `config_override` is provided, loads only that file. Otherwise uses the
/// project config if one exists, falling back to the built-in table.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<(HealthConfig, ConfigSource)> {
    let (config, source) = match config_override {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            (load_config_file(&path)?, ConfigSource::Explicit(path))
        }
        None => match find_project_config(project_root) {
            Some(path) => (load_config_file(&path)?, ConfigSource::Project(path)),
            None => (builtin_config(), ConfigSource::Builtin),
        },
    };

    validate(&config)?;
    tracing::info!("Loaded {} checks from {}", config.total_checks(), source);

    Ok((config, source))
}
