//! Python runtime discovery and version validation.
//!
//! Candidate executable names are probed in priority order and the first one
//! that resolves on the PATH wins. The selected interpreter then has to
//! report a version at or above the supported floor.

use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BootstrapError, Result};

/// Executable names probed in order; `py` is deliberately absent because the
/// Windows launcher answers `--version` for whichever interpreter it proxies.
pub const RUNTIME_CANDIDATES: &[&str] = &["python3", "python"];

/// Oldest interpreter the application supports.
pub const MIN_MAJOR: u32 = 3;
pub const MIN_MINOR: u32 = 10;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub fn meets_floor(&self) -> bool {
        self.major > MIN_MAJOR || (self.major == MIN_MAJOR && self.minor >= MIN_MINOR)
    }
}

impl std::fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A discovered interpreter. Immutable once probed.
#[derive(Debug, Clone)]
pub struct RuntimeDescriptor {
    /// Resolved absolute path of the executable.
    pub command: PathBuf,
    /// Candidate name it was found under.
    pub name: String,
    pub version: RuntimeVersion,
}

/// Probe the candidate names, then validate the winner's reported version.
pub fn discover(explicit: Option<&str>) -> Result<RuntimeDescriptor> {
    let (name, command) = match explicit {
        Some(cmd) => {
            let path = which::which(cmd).map_err(|_| BootstrapError::RuntimeNotFound {
                tried: cmd.to_string(),
            })?;
            (cmd.to_string(), path)
        }
        None => resolve_candidate()?,
    };

    let version = probe_version(&command, &name)?;
    if !version.meets_floor() {
        return Err(BootstrapError::UnsupportedVersion {
            command: name,
            found: version.to_string(),
            floor: format!("{MIN_MAJOR}.{MIN_MINOR}"),
        });
    }

    Ok(RuntimeDescriptor {
        command,
        name,
        version,
    })
}

fn resolve_candidate() -> Result<(String, PathBuf)> {
    for name in RUNTIME_CANDIDATES {
        if let Ok(path) = which::which(name) {
            return Ok((name.to_string(), path));
        }
    }
    Err(BootstrapError::RuntimeNotFound {
        tried: RUNTIME_CANDIDATES.join(", "),
    })
}

fn probe_version(command: &Path, name: &str) -> Result<RuntimeVersion> {
    let output = Command::new(command).arg("--version").output()?;

    // CPython before 3.4 printed the banner to stderr; check both streams.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    parse_version(&stdout)
        .or_else(|| parse_version(&stderr))
        .ok_or_else(|| BootstrapError::RuntimeNotFound {
            tried: format!("{name} (unparseable --version output)"),
        })
}

/// Extract (major, minor) from free-text `--version` output. A missing patch
/// component is tolerated: "Python 3.10" parses the same as "Python 3.10.0".
pub fn parse_version(text: &str) -> Option<RuntimeVersion> {
    let captures = VERSION_PATTERN.captures(text)?;
    let major = captures.get(1)?.as_str().parse().ok()?;
    let minor = captures.get(2)?.as_str().parse().ok()?;
    Some(RuntimeVersion { major, minor })
}
