//! mclaunch - Native preflight launcher for the `mcserver` development tool.
//!
//! `mclaunch` gates `python3 -m mcserver` behind environment validation: it
//! resolves a CPython interpreter on PATH, enforces a minimum interpreter
//! version, verifies that the tool's Python dependencies import cleanly, and
//! only then hands the process over with all arguments forwarded unchanged.
//! Any failed check prints a single diagnostic to stderr and terminates with
//! exit code 2; after a successful handoff the exit code belongs entirely to
//! the downstream tool.
//!
//! # Modules
//!
//! - [`dispatch`] - Handoff to the external entry module
//! - [`error`] - Error types and result alias
//! - [`interpreter`] - Interpreter discovery and version detection
//! - [`preflight`] - Environment checks that gate the handoff
//!
//! # Example
//!
//! ```
//! use mclaunch::interpreter::PythonVersion;
//!
//! let version = PythonVersion::parse("Python 3.10.12").unwrap();
//! assert!(version.at_least(3, 9));
//! assert_eq!(version.to_string(), "3.10");
//! ```
//!
//! For end-to-end launch behavior, see the integration tests.

pub mod dispatch;
pub mod error;
pub mod interpreter;
pub mod preflight;

pub use error::{LaunchError, Result};
