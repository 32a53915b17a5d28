//! Check primitives.
//!
//! Three probes, one result shape:
//! - [`filesystem`] - file and directory existence
//! - [`command`] - shell command exit status
//!
//! A [`CheckSpec`] names one probe and its parameters; [`CheckSpec::evaluate`]
//! runs it against a [`CheckContext`] and always returns a [`CheckResult`].
//! No probe panics or returns an error for a failing check.

pub mod command;
pub mod filesystem;
pub mod result;
pub mod spec;

pub use command::check_command_succeeds;
pub use filesystem::{check_dir_exists, check_file_exists};
pub use result::{CheckKind, CheckResult, Failure};
pub use spec::{CheckContext, CheckSpec, FileKind};
