//! Integration tests for the repohealth binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A project whose table checks dirs d0..d9, with the first `present` created.
fn dir_scenario(present: usize) -> TempDir {
    let temp = TempDir::new().unwrap();
    let mut config = String::from("title: Scenario\ngroups:\n  - name: Project Structure\n    icon: \"📁\"\n    checks:\n");
    for i in 0..10 {
        config.push_str(&format!(
            "      - type: dir\n        path: d{i}\n        description: Dir {i}\n"
        ));
        if i < present {
            fs::create_dir(temp.path().join(format!("d{i}"))).unwrap();
        }
    }
    fs::write(temp.path().join(".repohealth.yml"), config).unwrap();
    temp
}

fn repohealth() -> Command {
    let mut cmd = Command::new(cargo_bin("repohealth"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = repohealth();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Repository health checks"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = repohealth();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn all_checks_pass_is_excellent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(10);
    let mut cmd = repohealth();
    cmd.arg("--project").arg(temp.path());
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("🔍 Scenario Health Check"))
        .stdout(predicate::str::contains("📁 Project Structure:"))
        .stdout(predicate::str::contains("✅ Dir 0: d0"))
        .stdout(predicate::str::contains("Total Checks: 10"))
        .stdout(predicate::str::contains("Success Rate: 100.0%"))
        .stdout(predicate::str::contains("🎉 Repository health: EXCELLENT"));
    Ok(())
}

#[test]
fn eight_of_ten_is_good() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(8);
    let mut cmd = repohealth();
    cmd.args(["check", "--project"]).arg(temp.path());
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("❌ Dir 9: d9 (MISSING)"))
        .stdout(predicate::str::contains("Passed: 8"))
        .stdout(predicate::str::contains("Failed: 2"))
        .stdout(predicate::str::contains("Success Rate: 80.0%"))
        .stdout(predicate::str::contains("Repository health: GOOD"));
    Ok(())
}

#[test]
fn half_passing_is_poor_and_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(5);
    let mut cmd = repohealth();
    cmd.args(["check", "--project"]).arg(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Success Rate: 50.0%"))
        .stdout(predicate::str::contains("❌ Repository health: POOR"));
    Ok(())
}

#[test]
fn seven_of_ten_is_fair_and_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(7);
    let mut cmd = repohealth();
    cmd.arg("--project").arg(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Success Rate: 70.0%"))
        .stdout(predicate::str::contains("Repository health: FAIR"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn invalid_executable_fails_but_run_continues() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("README.md"), "# hi")?;
    fs::write(
        temp.path().join(".repohealth.yml"),
        r#"
groups:
  - name: Git and Submodule
    checks:
      - type: command
        command: definitely-not-a-real-binary-7f3a
        description: Invalid executable
      - type: command
        command: "exit 0"
        description: Trivial
  - name: Configuration Files
    checks:
      - type: file
        path: README.md
        description: Project documentation
"#,
    )?;

    let mut cmd = repohealth();
    cmd.arg("--project").arg(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Invalid executable: FAIL - "))
        .stdout(predicate::str::contains("✅ Trivial: PASS"))
        .stdout(predicate::str::contains("✅ Project documentation: README.md"))
        .stdout(predicate::str::contains("Total Checks: 3"))
        .stdout(predicate::str::contains("Passed: 2"));
    Ok(())
}

#[test]
fn json_output_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(8);
    let mut cmd = repohealth();
    cmd.args(["check", "--json", "--project"]).arg(temp.path());
    let output = cmd.assert().code(0).get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["status"], "good");
    assert_eq!(json["total_checks"], 10);
    assert_eq!(json["passed_checks"], 8);
    assert_eq!(json["success_rate"], 80.0);
    assert_eq!(json["groups"][0]["name"], "Project Structure");
    Ok(())
}

#[test]
fn quiet_mode_prints_only_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(10);
    let mut cmd = repohealth();
    cmd.args(["--quiet", "--project"]).arg(temp.path());
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("HEALTH CHECK SUMMARY"))
        .stdout(predicate::str::contains("Dir 0").not())
        .stdout(predicate::str::contains("Project Structure").not());
    Ok(())
}

#[test]
fn group_filter_limits_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(10);
    let mut config = fs::read_to_string(temp.path().join(".repohealth.yml"))?;
    config.push_str(
        "  - name: Docs\n    checks:\n      - type: file\n        path: MISSING.md\n        description: Missing doc\n",
    );
    fs::write(temp.path().join(".repohealth.yml"), config)?;

    let mut cmd = repohealth();
    cmd.args(["check", "--group", "project structure", "--project"])
        .arg(temp.path());
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("Total Checks: 10"))
        .stdout(predicate::str::contains("Missing doc").not());
    Ok(())
}

#[test]
fn unknown_group_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = dir_scenario(10);
    let mut cmd = repohealth();
    cmd.args(["check", "--group", "Nope", "--project"])
        .arg(temp.path());
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Nope"));
    Ok(())
}

#[test]
fn malformed_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".repohealth.yml"), "groups: [not: valid: yaml")?;
    let mut cmd = repohealth();
    cmd.arg("--project").arg(temp.path());
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = repohealth();
    cmd.args(["--config", "nowhere.yml", "--project"])
        .arg(temp.path());
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("nowhere.yml"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn timeout_flag_bounds_slow_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".repohealth.yml"),
        "groups:\n  - name: Slow\n    checks:\n      - type: command\n        command: sleep 30\n        description: Hangs\n",
    )?;

    let start = std::time::Instant::now();
    let mut cmd = repohealth();
    cmd.args(["check", "--timeout", "1", "--project"])
        .arg(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Hangs: FAIL - timed out after 1s"));
    assert!(start.elapsed() < std::time::Duration::from_secs(20));
    Ok(())
}

#[test]
fn list_shows_builtin_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = repohealth();
    cmd.args(["list", "--project"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("Project Structure"))
        .stdout(predicate::str::contains("28 checks in 6 groups"));
    Ok(())
}

#[test]
fn init_creates_config_then_refuses_overwrite() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = repohealth();
    cmd.args(["init", "--project"]).arg(temp.path());
    cmd.assert().success();
    assert!(temp.path().join(".repohealth.yml").exists());

    let mut again = repohealth();
    again.args(["init", "--project"]).arg(temp.path());
    again
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut forced = repohealth();
    forced.args(["init", "--force", "--project"]).arg(temp.path());
    forced.assert().success();
    Ok(())
}

#[test]
fn init_output_feeds_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    repohealth()
        .args(["init", "--project"])
        .arg(temp.path())
        .assert()
        .success();

    let mut cmd = repohealth();
    cmd.args(["list", "--project"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".repohealth.yml"))
        .stdout(predicate::str::contains("28 checks in 6 groups"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = repohealth();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("repohealth"));
    Ok(())
}

#[test]
fn zero_timeout_is_rejected_by_parser() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = repohealth();
    cmd.args(["check", "--timeout", "0"]);
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn oversized_timeout_flag_is_rejected_by_parser() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = repohealth();
    cmd.args(["check", "--timeout", "18446744073709551615"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("panicked").not());
    Ok(())
}

#[test]
fn oversized_config_timeout_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".repohealth.yml"),
        "settings:\n  command_timeout: 18446744073709551615\ngroups:\n  - name: Build\n    checks:\n      - type: command\n        command: \"true\"\n        description: Noop\n",
    )?;

    let mut cmd = repohealth();
    cmd.args(["check", "--project"]).arg(temp.path());
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("command_timeout"))
        .stderr(predicate::str::contains("panicked").not());
    Ok(())
}
