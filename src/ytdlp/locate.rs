//! yt-dlp executable resolution.
//!
//! The executable location is resolved once, at invoker construction:
//!
//! 1. the explicitly configured path, when it exists on disk,
//! 2. a search of the process's `PATH` for the platform binary name,
//! 3. a fixed fallback covering a common install location,
//! 4. the bare command name, deferring the failure to invocation time where
//!    it is reported with remediation guidance.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Platform-appropriate binary name.
#[cfg(windows)]
pub const BIN_NAME: &str = "yt-dlp.exe";
/// Platform-appropriate binary name.
#[cfg(not(windows))]
pub const BIN_NAME: &str = "yt-dlp";

/// Resolve the yt-dlp executable to invoke.
///
/// Never fails: when nothing is found the bare command name is returned and
/// the spawn itself produces the actionable error.
pub fn resolve(configured: Option<&Path>) -> PathBuf {
    if let Some(path) = configured {
        if path.is_file() {
            return path.to_path_buf();
        }
        warn!(
            path = %path.display(),
            "configured yt-dlp path does not exist, searching instead"
        );
    }

    if let Ok(found) = which::which(BIN_NAME) {
        debug!(path = %found.display(), "found yt-dlp on PATH");
        return found;
    }

    if let Some(fallback) = common_install_path() {
        if fallback.is_file() {
            debug!(path = %fallback.display(), "found yt-dlp at common install location");
            return fallback;
        }
    }

    PathBuf::from(BIN_NAME)
}

/// A typical per-user install location for the current platform.
#[cfg(windows)]
fn common_install_path() -> Option<PathBuf> {
    let profile = std::env::var_os("USERPROFILE")?;
    Some(
        PathBuf::from(profile)
            .join("AppData")
            .join("Local")
            .join("Microsoft")
            .join("WindowsApps")
            .join(BIN_NAME),
    )
}

/// A typical install location for the current platform.
#[cfg(not(windows))]
fn common_install_path() -> Option<PathBuf> {
    Some(PathBuf::from("/usr/local/bin").join(BIN_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_configured_path_wins_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(BIN_NAME);
        fs::write(&exe, b"#!/bin/sh\n").unwrap();

        assert_eq!(resolve(Some(&exe)), exe);
    }

    #[test]
    fn test_missing_configured_path_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").join(BIN_NAME);

        // Whatever the search finds, it must not be the missing path.
        assert_ne!(resolve(Some(&missing)), missing);
    }

    #[test]
    fn test_resolution_never_fails() {
        let resolved = resolve(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
