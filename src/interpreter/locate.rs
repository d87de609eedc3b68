//! PATH resolution for the interpreter executable.
//!
//! The launcher resolves the interpreter itself rather than shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling. Resolution walks the entries of
//! the `PATH` environment variable in order and takes the first existing,
//! executable regular file.

use std::path::{Path, PathBuf};

use crate::error::{LaunchError, Result};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve `name` against an explicit list of directories.
///
/// Returns the first match that exists and is executable.
pub fn resolve_in(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve the interpreter executable on the system PATH.
pub fn locate(name: &str) -> Result<PathBuf> {
    match resolve_in(name, &parse_system_path()) {
        Some(path) => {
            tracing::debug!(interpreter = %path.display(), "resolved interpreter");
            Ok(path)
        }
        None => Err(LaunchError::InterpreterNotFound {
            interpreter: name.to_string(),
        }),
    }
}
