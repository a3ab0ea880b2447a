//! Environment composition for the launched script.
//!
//! Before every launch three variables are edited, in a fixed order, with the
//! same prepend-merge rule: the new value goes in front of whatever is there,
//! joined by the Windows list separator, so bundled paths take precedence
//! while nothing the user had configured is ever lost.

use log::debug;

use crate::error::LaunchError;
use crate::host::Host;
use crate::paths::InstallDirs;
use crate::profile::Profile;

/// Python's package search path variable.
pub const MODULE_PATH_VAR: &str = "PYTHONPATH";
/// The executable search path variable.
pub const EXECUTABLE_PATH_VAR: &str = "PATH";

/// List separator used when merging into an existing value. The launcher
/// targets Windows; the portable host keeps the same separator so composed
/// values are identical everywhere.
const SEPARATOR: char = ';';

/// Prepend `value` to `name`: the result is `value` alone when the variable
/// is unset or empty, otherwise `value;<existing>`.
///
/// # Errors
///
/// Returns [`LaunchError::Environment`] when the underlying write fails.
pub fn prepend(host: &dyn Host, name: &str, value: &str) -> Result<(), LaunchError> {
    let merged = match host.env_var(name) {
        Some(existing) => format!("{value}{SEPARATOR}{existing}"),
        None => value.to_string(),
    };
    debug!("{name}={merged}");
    host.set_env_var(name, &merged)
        .map_err(|source| LaunchError::Environment {
            name: name.to_string(),
            source,
        })
}

/// Apply every edit the application needs, in order: the bundled package path
/// onto [`MODULE_PATH_VAR`], the block definitions path onto the application
/// resource variable, and the launcher's own directory onto
/// [`EXECUTABLE_PATH_VAR`] so bundled runtime libraries win over system-wide
/// ones.
///
/// # Errors
///
/// Returns [`LaunchError::Environment`] from the first edit that fails;
/// later edits are not attempted.
pub fn apply_launch_environment(
    host: &dyn Host,
    profile: &Profile,
    dirs: &InstallDirs,
) -> Result<(), LaunchError> {
    let module_path = profile.module_search_path(&dirs.root_dir);
    prepend(host, MODULE_PATH_VAR, &module_path.to_string_lossy())?;

    let resource_path = profile.resource_search_path(&dirs.root_dir);
    prepend(host, &profile.resource_path_var, &resource_path.to_string_lossy())?;

    prepend(host, EXECUTABLE_PATH_VAR, &dirs.self_dir.to_string_lossy())?;
    Ok(())
}
