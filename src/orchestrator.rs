//! Launch orchestration and failure recovery.
//!
//! The sequence is strictly forward: discover an interpreter, locate the
//! entry script, compose the environment, launch, and inspect the exit code.
//! Any error before or during the spawn is terminal and bubbles up to the
//! CLI's dialog dispatch. The one recoverable condition is a launch that
//! spawned fine but exited non-zero: the user is offered one run of the
//! bundled diagnostic helper, and the launcher then exits with whichever
//! exit code that decision produced.

use std::path::PathBuf;

use log::info;

use crate::env;
use crate::error::LaunchError;
use crate::host::Host;
use crate::launch::{self, LaunchSpec};
use crate::locate;
use crate::paths::InstallDirs;
use crate::profile::Profile;

/// Run the full launch sequence and return the exit code the launcher
/// process should terminate with.
///
/// # Errors
///
/// Any [`LaunchError`] is terminal: discovery, script location, environment
/// composition and spawn failures are reported by the caller and never
/// retried. A non-zero child exit code is not an error; it feeds the
/// recovery prompt and ends up as the returned code.
pub fn run(
    host: &dyn Host,
    profile: &Profile,
    dirs: &InstallDirs,
    forwarded_args: &[String],
) -> Result<i32, LaunchError> {
    let interpreter = locate::locate(host, profile)?;

    let entry = dirs.self_dir.join(&profile.entry_script);
    if !host.file_exists(&entry) {
        return Err(LaunchError::Location { path: entry });
    }

    env::apply_launch_environment(host, profile, dirs)?;

    info!("launching {} via {}", entry.display(), interpreter.display());
    let spec = LaunchSpec::new(interpreter.clone(), entry, forwarded_args.to_vec());
    let result = launch::run(host, &spec, true)?;
    if result.exit_code == 0 {
        return Ok(0);
    }

    recover(host, profile, dirs, interpreter, result.exit_code)
}

/// Offer the diagnostic helper after a failed run. Declining keeps the
/// original exit code; accepting replaces it with the helper's.
fn recover(
    host: &dyn Host,
    profile: &Profile,
    dirs: &InstallDirs,
    interpreter: PathBuf,
    failed_code: i32,
) -> Result<i32, LaunchError> {
    let title = format!("{} failed!", profile.app_name);
    let message = format!(
        "{} exited with code {failed_code}.\nRun the {} diagnostic tool to check the installation?",
        profile.app_name, profile.app_name
    );
    if !host.confirm(&title, &message) {
        return Ok(failed_code);
    }

    let helper = dirs.self_dir.join(&profile.helper_script);
    if !host.file_exists(&helper) {
        return Err(LaunchError::Location { path: helper });
    }

    // The helper is an interactive console tool, so it gets a window.
    let spec = LaunchSpec::new(interpreter, helper, Vec::new());
    let result = launch::run(host, &spec, false)?;
    Ok(result.exit_code)
}
