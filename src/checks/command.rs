//! Command exit-status probe.

use std::time::{Duration, Instant};

use crate::shell::{execute, CommandOptions, CommandResult};

use super::result::{CheckKind, CheckResult, Failure};
use super::spec::CheckContext;

/// Check that `command` exits with code 0.
///
/// The command runs through the shell in the project root with output
/// captured. Launch errors, non-zero exits, and expired deadlines all
/// become failed results; nothing propagates to the caller.
pub fn check_command_succeeds(command: &str, description: &str, ctx: &CheckContext) -> CheckResult {
    let options = CommandOptions {
        cwd: Some(ctx.project_root.clone()),
        timeout: ctx.command_timeout,
        ..Default::default()
    };

    let start = Instant::now();
    let outcome = match execute(command, &options) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!("Check '{}' could not launch: {}", description, e);
            return CheckResult::fail(
                description,
                &ctx.category,
                CheckKind::Command,
                command,
                Failure::LaunchError,
                e.to_string(),
            )
            .with_duration(start.elapsed());
        }
    };

    let result = if outcome.success {
        CheckResult::pass(description, &ctx.category, CheckKind::Command, command)
    } else if outcome.timed_out {
        let limit = ctx.command_timeout.unwrap_or(outcome.duration);
        CheckResult::fail(
            description,
            &ctx.category,
            CheckKind::Command,
            command,
            Failure::TimedOut,
            format!("timed out after {}", format_limit(limit)),
        )
    } else {
        CheckResult::fail(
            description,
            &ctx.category,
            CheckKind::Command,
            command,
            Failure::NonZeroExit,
            failure_detail(&outcome),
        )
    };

    result
        .with_output(combined_output(&outcome))
        .with_duration(outcome.duration)
}

/// Pick the most useful one-line explanation for a non-zero exit.
///
/// Prefers stderr, then stdout, then the bare exit status, so the detail is
/// never empty.
fn failure_detail(outcome: &CommandResult) -> String {
    let stderr = outcome.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    let stdout = outcome.stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }

    match outcome.exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn combined_output(outcome: &CommandResult) -> String {
    match (outcome.stdout.is_empty(), outcome.stderr.is_empty()) {
        (true, true) => String::new(),
        (false, true) => outcome.stdout.clone(),
        (true, false) => outcome.stderr.clone(),
        (false, false) => format!("{}{}", outcome.stdout, outcome.stderr),
    }
}

fn format_limit(limit: Duration) -> String {
    if limit.subsec_millis() == 0 {
        format!("{}s", limit.as_secs())
    } else {
        format!("{}ms", limit.as_millis())
    }
}
