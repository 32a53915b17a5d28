//! Shell command execution.

use crate::error::{HealthError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::platform::detect_shell;

/// How often a deadline-bounded wait polls the child for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed for exceeding its deadline.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    ///
    /// Output is not collected: a grandchild of the shell may still hold
    /// the pipes open after the shell itself is killed.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Deadline for the command (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

/// Execute a shell command with stdout and stderr captured.
///
/// Returns `Err` only when the shell cannot be spawned or awaited. A
/// non-zero exit or an expired deadline is reported through the returned
/// [`CommandResult`].
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let shell = detect_shell();

    let mut cmd = Command::new(&shell.executable);
    cmd.arg(shell.flag);
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    // A deadline kills the whole process group, so anything the shell forks
    // dies with it. Without one the shell stays in the foreground group and
    // receives Ctrl-C directly.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        if options.timeout.is_some() {
            cmd.process_group(0);
        }
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Spawning `{}` via {}", command, shell.executable.display());

    let mut child = cmd.spawn().map_err(|e| launch_error(command, e))?;

    // Drain both pipes concurrently so a chatty command cannot fill one
    // buffer and stall while we wait on it.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = match options.timeout {
        Some(timeout) => {
            wait_with_deadline(&mut child, timeout).map_err(|e| launch_error(command, e))?
        }
        None => Some(child.wait().map_err(|e| launch_error(command, e))?),
    };

    let Some(status) = status else {
        tracing::warn!("Command `{}` timed out after {:?}", command, start.elapsed());
        return Ok(CommandResult::timed_out(start.elapsed()));
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Wait for `child` until `timeout` elapses.
///
/// Returns `Ok(None)` if the deadline passed; the child and its process
/// group have then been killed and the child reaped. A timeout too large to
/// represent as an [`Instant`] waits indefinitely.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            kill_tree(child);
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Kill the child's process group, then the child itself, and reap it.
///
/// The child may exit between `try_wait` and the kill; errors are ignored.
fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: killpg has no memory-safety preconditions. The group id
            // is the child's pid, which stays reserved until it is reaped.
            unsafe {
                libc::killpg(pgid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

fn launch_error(command: &str, err: std::io::Error) -> HealthError {
    HealthError::CommandFailed {
        command: command.to_string(),
        message: err.to_string(),
    }
}
