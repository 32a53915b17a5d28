//! Shell command execution.
//!
//! Everything that spawns a process goes through [`execute`], which
//! captures output and optionally bounds the wait with a deadline.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{detect_shell, is_ci, ShellInfo};
