//! Integration tests for config module public API.

use repohealth::checks::{CheckSpec, FileKind};
use repohealth::config::{
    builtin_config, find_project_root, load_config, validate, validate_config, CheckGroup,
    ConfigSource, HealthConfig, CONFIG_DIR, CONFIG_FILE,
};
use repohealth::HealthError;
use std::fs;
use tempfile::TempDir;

#[test]
fn builtin_table_is_valid() {
    let config = builtin_config();
    assert!(validate(&config).is_ok());
    assert_eq!(config.groups.len(), 6);
    assert_eq!(config.total_checks(), 28);
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE),
        r#"
title: DarbitNet
settings:
  command_timeout: 300
  file_kind: any
groups:
  - name: Project Structure
    icon: "📁"
    checks:
      - type: dir
        path: src
        description: Source directory
  - name: Git and Submodule
    checks:
      - type: command
        command: git status --porcelain
        description: Working directory clean
"#,
    )
    .unwrap();

    let (config, source) = load_config(temp.path(), None).unwrap();

    assert_eq!(source, ConfigSource::Project(temp.path().join(CONFIG_FILE)));
    assert_eq!(config.display_title(), "DarbitNet");
    assert_eq!(config.settings.command_timeout, Some(300));
    assert_eq!(config.settings.file_kind, FileKind::Any);
    assert_eq!(config.groups[0].icon.as_deref(), Some("📁"));
    assert_eq!(
        config.groups[1].checks[0],
        CheckSpec::command("git status --porcelain", "Working directory clean")
    );
}

#[test]
fn config_dir_is_discovered() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
    fs::write(
        temp.path().join(CONFIG_DIR).join("config.yml"),
        "title: Nested\n",
    )
    .unwrap();

    let (config, source) = load_config(temp.path(), None).unwrap();

    assert_eq!(config.display_title(), "Nested");
    assert!(matches!(source, ConfigSource::Project(_)));
}

#[test]
fn falls_back_to_builtin() {
    let temp = TempDir::new().unwrap();
    let (config, source) = load_config(temp.path(), None).unwrap();
    assert_eq!(source, ConfigSource::Builtin);
    assert_eq!(config, builtin_config());
}

#[test]
fn violations_are_reported_together() {
    let config = HealthConfig {
        groups: vec![
            CheckGroup::new("Docs").with_check(CheckSpec::file("", "No path")),
            CheckGroup::new("docs").with_check(CheckSpec::command("true", "")),
        ],
        ..Default::default()
    };

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 3);

    match validate(&config) {
        Err(HealthError::ConfigValidationError { message }) => {
            assert_eq!(message.matches("; ").count(), 2);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn empty_config_is_valid() {
    assert!(validate(&HealthConfig::default()).is_ok());
}

#[test]
fn project_root_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
    let nested = temp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
}
