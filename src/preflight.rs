//! Environment checks that gate the handoff to the entry module.
//!
//! Checks run strictly in sequence and are fatal on first failure; there is
//! no aggregation of multiple failures into one report. A check that passes
//! produces no user-visible output, only a debug-level trace event.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{LaunchError, Result};
use crate::interpreter::PythonVersion;

/// Interpreter executable the launcher resolves and hands off to.
pub const INTERPRETER: &str = "python3";

/// Minimum supported interpreter minor version on the 3.x line.
pub const REQUIRED_MINOR_VERSION: u32 = 9;

/// Python dependencies that must import cleanly before handoff, probed in order.
pub const REQUIRED_DEPENDENCIES: &[&str] = &["click", "toml", "requests"];

/// Verify the interpreter at `python` is at least Python 3.`required_minor`.
pub fn require_minor_version(python: &Path, required_minor: u32) -> Result<()> {
    let version = PythonVersion::query(python)?;
    if !version.at_least(3, required_minor) {
        return Err(LaunchError::UnsupportedRuntimeVersion {
            required: required_minor,
            major: version.major,
            minor: version.minor,
        });
    }
    tracing::debug!(%version, required_minor, "version gate passed");
    Ok(())
}

/// Verify `name` can be imported by the interpreter at `python`.
///
/// Any non-zero probe exit counts as a missing dependency: a module that is
/// absent and a module that raises at import time are equally unusable to
/// the downstream tool.
pub fn require_dependency(python: &Path, name: &str) -> Result<()> {
    let status = Command::new(python)
        .arg("-c")
        .arg(format!("import {name}"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(LaunchError::MissingDependency {
            name: name.to_string(),
        });
    }
    tracing::debug!(dependency = name, "import probe passed");
    Ok(())
}
