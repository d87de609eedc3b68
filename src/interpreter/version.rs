//! Version banner parsing and querying.
//!
//! The interpreter reports itself as `Python <major>.<minor>[.<rest>]` when
//! invoked with `--version`. Only the major/minor pair matters to the
//! launcher; patch levels and pre-release suffixes are ignored.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{LaunchError, Result};

/// Matches a `Python 3.10.12`-style banner, capturing major and minor.
fn banner_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Python (\d+)\.(\d+)").expect("banner pattern compiles"))
}

/// A CPython interpreter version, compared tuple-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    /// Parse a version banner such as `Python 3.10.12`.
    pub fn parse(banner: &str) -> Option<Self> {
        let caps = banner_pattern().captures(banner)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        Some(Self { major, minor })
    }

    /// Ask the interpreter at `path` for its version.
    ///
    /// CPython up to 3.3 printed the banner to stderr, so stdout is read
    /// first with a stderr fallback.
    pub fn query(path: &Path) -> Result<Self> {
        let output = Command::new(path)
            .arg("--version")
            .output()
            .map_err(|err| LaunchError::VersionDetectFailed {
                message: format!("unable to run {}: {err}", path.display()),
            })?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let banner = if stdout.trim().is_empty() {
            stderr.trim()
        } else {
            stdout.trim()
        };

        match Self::parse(banner) {
            Some(version) => {
                tracing::debug!(%version, "detected interpreter version");
                Ok(version)
            }
            None => Err(LaunchError::VersionDetectFailed {
                message: format!("unrecognized banner {banner:?}"),
            }),
        }
    }

    /// Whether this version satisfies a `(major, minor)` minimum.
    pub fn at_least(self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_banner() {
        let version = PythonVersion::parse("Python 3.10.12").unwrap();
        assert_eq!(version, PythonVersion { major: 3, minor: 10 });
    }

    #[test]
    fn parses_banner_without_patch() {
        let version = PythonVersion::parse("Python 3.9").unwrap();
        assert_eq!(version, PythonVersion { major: 3, minor: 9 });
    }

    #[test]
    fn parses_prerelease_banner() {
        let version = PythonVersion::parse("Python 4.0.0a1").unwrap();
        assert_eq!(version, PythonVersion { major: 4, minor: 0 });
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(PythonVersion::parse("Pithon three point nine"), None);
        assert_eq!(PythonVersion::parse(""), None);
    }

    #[test]
    fn comparison_is_tuple_wise() {
        let v3_8 = PythonVersion { major: 3, minor: 8 };
        let v3_9 = PythonVersion { major: 3, minor: 9 };
        let v3_10 = PythonVersion { major: 3, minor: 10 };
        let v4_0 = PythonVersion { major: 4, minor: 0 };

        assert!(!v3_8.at_least(3, 9));
        assert!(v3_9.at_least(3, 9));
        assert!(v3_10.at_least(3, 9));
        assert!(v4_0.at_least(3, 9));
        assert!(v3_10 > v3_9 && v4_0 > v3_10);
    }

    #[test]
    fn displays_major_dot_minor() {
        let version = PythonVersion { major: 3, minor: 8 };
        assert_eq!(version.to_string(), "3.8");
    }
}
