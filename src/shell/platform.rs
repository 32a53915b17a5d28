//! Platform-specific shell detection.

use std::path::PathBuf;

/// The shell used to run check commands.
#[derive(Debug, Clone)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Flag that makes the shell run its next argument as a command.
    pub flag: &'static str,
}

/// Detect the shell for running check commands.
///
/// Always the POSIX `/bin/sh` on Unix, never the user's `$SHELL`: check
/// results must not depend on who runs them or what their rc files do.
pub fn detect_shell() -> ShellInfo {
    if cfg!(target_os = "windows") {
        ShellInfo {
            executable: std::env::var("COMSPEC")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cmd.exe")),
            flag: "/C",
        }
    } else {
        ShellInfo {
            executable: PathBuf::from("/bin/sh"),
            flag: "-c",
        }
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force the non-interactive UI in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
