//! Installation path resolution.
//!
//! The launcher binary lives in `<install-root>/bin/`, so the directory of
//! the running executable locates the scripts and its parent locates the
//! install root that the search paths derive from.

use std::path::PathBuf;

use crate::error::LaunchError;

/// The two directories everything else is resolved against.
#[derive(Debug, Clone)]
pub struct InstallDirs {
    /// Directory containing the launcher binary (and the scripts).
    pub self_dir: PathBuf,
    /// One level above `self_dir`: the installation root.
    pub root_dir: PathBuf,
}

/// Resolve the install directories from the running executable's location.
///
/// # Errors
///
/// Returns [`LaunchError::Resolution`] if the platform cannot report the
/// executable path or the path has fewer than two parent segments.
pub fn resolve() -> Result<InstallDirs, LaunchError> {
    let exe = std::env::current_exe().map_err(|err| LaunchError::Resolution {
        reason: format!("Could not determine the launcher executable path: {err}"),
    })?;
    from_executable(exe)
}

fn from_executable(exe: PathBuf) -> Result<InstallDirs, LaunchError> {
    let self_dir = exe
        .parent()
        .ok_or_else(|| LaunchError::Resolution {
            reason: format!("'{}' has no parent directory", exe.display()),
        })?
        .to_path_buf();
    let root_dir = self_dir
        .parent()
        .ok_or_else(|| LaunchError::Resolution {
            reason: format!("'{}' has no parent directory", self_dir.display()),
        })?
        .to_path_buf();
    Ok(InstallDirs { self_dir, root_dir })
}
