//! Error types for launcher operations.
//!
//! This module defines [`LaunchError`], the primary error type used
//! throughout the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every variant is fatal: the launcher reports it once on stderr and
//! terminates with [`FAILURE_EXIT_CODE`]. There is no recovery, retry, or
//! aggregation path, so the variants exist to keep the fixed diagnostic
//! texts in one place rather than to support distinct handling. Users
//! distinguish failure kinds by message text, not by exit code.

use std::io;
use thiserror::Error;

/// Exit code used for every failure the launcher itself detects.
///
/// Exit codes other than this one come from the entry module, untranslated.
pub const FAILURE_EXIT_CODE: u8 = 2;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The interpreter executable is nowhere on PATH.
    #[error("Unable to find {interpreter} on PATH")]
    InterpreterNotFound { interpreter: String },

    /// The interpreter ran but its version could not be determined.
    #[error("Unable to determine interpreter version: {message}")]
    VersionDetectFailed { message: String },

    /// The interpreter is older than the tool supports.
    ///
    /// Display spans two lines; the second is indented four spaces so it
    /// reads as a continuation of the first.
    #[error("Requires at least Python 3.{required}\n    You only have {major}.{minor}")]
    UnsupportedRuntimeVersion {
        required: u32,
        major: u32,
        minor: u32,
    },

    /// A required Python dependency cannot be imported.
    #[error("Missing required dependency: {name}")]
    MissingDependency { name: String },

    /// Handing off to the entry module failed.
    #[error("Unable to start module {module}: {source}")]
    DispatchFailed { module: String, source: io::Error },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
