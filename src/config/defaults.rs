//! Built-in check table.
//!
//! Used when a project has no `.repohealth.yml`, and written out by
//! `repohealth init` as a starting point.

use crate::checks::CheckSpec;

use super::schema::{CheckGroup, HealthConfig, Settings};

/// The default check table.
pub fn builtin_config() -> HealthConfig {
    HealthConfig {
        title: None,
        settings: Settings::default(),
        groups: vec![
            project_structure(),
            configuration_files(),
            ci_infrastructure(),
            testing_infrastructure(),
            git_and_submodules(),
            test_execution(),
        ],
    }
}

fn project_structure() -> CheckGroup {
    CheckGroup::new("Project Structure")
        .with_icon("📁")
        .with_check(CheckSpec::dir("src", "Source directory"))
        .with_check(CheckSpec::dir("tests", "Tests directory"))
        .with_check(CheckSpec::dir("utils", "Utilities directory"))
        .with_check(CheckSpec::dir("docs", "Documentation directory"))
        .with_check(CheckSpec::dir("3rdparty", "Third-party dependencies"))
        .with_check(CheckSpec::dir(".github", "GitHub configuration"))
        .with_check(CheckSpec::dir(".github/workflows", "GitHub Actions workflows"))
}

fn configuration_files() -> CheckGroup {
    CheckGroup::new("Configuration Files")
        .with_icon("📄")
        .with_check(CheckSpec::file("CMakeLists.txt", "CMake build configuration"))
        .with_check(CheckSpec::file("requirements.txt", "Python dependencies"))
        .with_check(CheckSpec::file("README.md", "Project documentation"))
        .with_check(CheckSpec::file("LICENSE", "License file"))
        .with_check(CheckSpec::file(".gitignore", "Git ignore configuration"))
        .with_check(CheckSpec::file(".gitmodules", "Git submodules configuration"))
        .with_check(CheckSpec::file("CONTRIBUTING.md", "Contribution guidelines"))
        .with_check(CheckSpec::file("AUDIT_REPORT.md", "Audit report"))
        .with_check(CheckSpec::file("pytest.ini", "Testing configuration"))
        .with_check(CheckSpec::file(".flake8", "Code style configuration"))
        .with_check(CheckSpec::file(".bandit", "Security scanning configuration"))
}

fn ci_infrastructure() -> CheckGroup {
    CheckGroup::new("CI/CD Infrastructure")
        .with_icon("🔧")
        .with_check(CheckSpec::file(".github/workflows/ci.yml", "Main CI/CD pipeline"))
        .with_check(CheckSpec::file(
            ".github/workflows/codeql.yml",
            "Security scanning workflow",
        ))
        .with_check(CheckSpec::file(
            ".github/dependabot.yml",
            "Dependency update configuration",
        ))
}

fn testing_infrastructure() -> CheckGroup {
    CheckGroup::new("Testing Infrastructure")
        .with_icon("🧪")
        .with_check(CheckSpec::file("tests/test_utils.py", "Utility tests"))
        .with_check(CheckSpec::file("tests/test_setup_env.py", "Setup environment tests"))
        .with_check(CheckSpec::file("tests/test_e2e_benchmark.py", "Benchmark tests"))
        .with_check(CheckSpec::file(
            "tests/test_project_structure.py",
            "Project structure tests",
        ))
}

fn git_and_submodules() -> CheckGroup {
    CheckGroup::new("Git and Submodule")
        .with_icon("🔐")
        .with_check(CheckSpec::command(
            "git status --porcelain",
            "Working directory clean",
        ))
        .with_check(CheckSpec::command(
            "git submodule status",
            "Submodules initialized",
        ))
}

fn test_execution() -> CheckGroup {
    CheckGroup::new("Test Execution")
        .with_icon("🧪")
        .with_check(CheckSpec::command(
            "python -m pytest tests/ -v --tb=short",
            "Test suite execution",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckKind;

    #[test]
    fn builtin_groups_in_declaration_order() {
        let config = builtin_config();
        let names: Vec<_> = config.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Project Structure",
                "Configuration Files",
                "CI/CD Infrastructure",
                "Testing Infrastructure",
                "Git and Submodule",
                "Test Execution",
            ]
        );
    }

    #[test]
    fn builtin_check_counts() {
        let config = builtin_config();
        let counts: Vec<_> = config.groups.iter().map(|g| g.checks.len()).collect();
        assert_eq!(counts, vec![7, 11, 3, 4, 2, 1]);
        assert_eq!(config.total_checks(), 28);
    }

    #[test]
    fn structure_group_is_all_directories() {
        let config = builtin_config();
        assert!(config.groups[0]
            .checks
            .iter()
            .all(|c| c.kind() == CheckKind::Dir));
    }

    #[test]
    fn builtin_config_is_valid() {
        assert!(crate::config::validate(&builtin_config()).is_ok());
    }

    #[test]
    fn builtin_config_round_trips_through_yaml() {
        let config = builtin_config();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: HealthConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
