//! Filesystem probes.
//!
//! These never error: an unreadable, missing, or wrong-kind entry is a
//! failed [`CheckResult`].

use std::io;
use std::path::{Path, PathBuf};

use super::result::{CheckKind, CheckResult, Failure};
use super::spec::{CheckContext, FileKind};

/// Check that `path` is an existing file.
///
/// With [`FileKind::Regular`] the entry must be a regular file (symlinks are
/// followed); with [`FileKind::Any`] any existing entry passes.
pub fn check_file_exists(path: &str, description: &str, ctx: &CheckContext) -> CheckResult {
    let full_path = resolve(path, &ctx.project_root);

    let metadata = match full_path.metadata() {
        Ok(metadata) => metadata,
        Err(e) => return inaccessible(path, description, ctx, CheckKind::File, e),
    };

    if ctx.file_kind == FileKind::Any || metadata.is_file() {
        CheckResult::pass(description, &ctx.category, CheckKind::File, path)
    } else {
        CheckResult::fail(
            description,
            &ctx.category,
            CheckKind::File,
            path,
            Failure::WrongKind,
            format!("{} is not a regular file", path),
        )
    }
}

/// Check that `path` is an existing directory.
pub fn check_dir_exists(path: &str, description: &str, ctx: &CheckContext) -> CheckResult {
    let full_path = resolve(path, &ctx.project_root);

    let metadata = match full_path.metadata() {
        Ok(metadata) => metadata,
        Err(e) => return inaccessible(path, description, ctx, CheckKind::Dir, e),
    };

    if metadata.is_dir() {
        CheckResult::pass(description, &ctx.category, CheckKind::Dir, path)
    } else {
        CheckResult::fail(
            description,
            &ctx.category,
            CheckKind::Dir,
            path,
            Failure::WrongKind,
            format!("{} is not a directory", path),
        )
    }
}

/// Only `NotFound` counts as missing; any other error is reported as is.
fn inaccessible(
    path: &str,
    description: &str,
    ctx: &CheckContext,
    kind: CheckKind,
    err: io::Error,
) -> CheckResult {
    if err.kind() == io::ErrorKind::NotFound {
        return CheckResult::fail(
            description,
            &ctx.category,
            kind,
            path,
            Failure::Missing,
            format!("{} does not exist", path),
        );
    }

    tracing::debug!("Cannot inspect {}: {}", path, err);
    CheckResult::fail(
        description,
        &ctx.category,
        kind,
        path,
        Failure::Unreadable,
        err.to_string(),
    )
}

/// Resolve a configured path against the project root.
fn resolve(path: &str, project_root: &Path) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
