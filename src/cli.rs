//! CLI entry point.
//!
//! The launcher takes no options of its own: every argument is forwarded
//! verbatim, in order, to the application script. This module owns the one
//! place where a [`LaunchError`] turns into a dialog and the fixed failure
//! exit code.

use clap::Parser as ClapParser;

use crate::error::LaunchError;
use crate::host::{Host, NativeHost};
use crate::orchestrator;
use crate::paths;
use crate::profile::Profile;

/// Exit code for every terminal launcher failure. Launched scripts own every
/// other non-zero code.
pub const FAILURE_CODE: i32 = 1;

/// Log filter environment variable, e.g. `FLOWFORGE_LOG=debug` to see the
/// discovery trace.
const LOG_ENV: &str = "FLOWFORGE_LOG";

#[derive(ClapParser)]
#[command(name = "flowforge")]
#[command(version)]
#[command(about = "Launcher for the FlowForge flowgraph editor", long_about = None)]
struct Cli {
    /// Arguments forwarded verbatim to the application script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

/// Run the launcher and return the process exit code.
#[must_use]
pub fn run_cli() -> i32 {
    env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV)).init();

    let cli = Cli::parse();
    let profile = Profile::default();
    let host = NativeHost::new();

    let dirs = match paths::resolve() {
        Ok(dirs) => dirs,
        Err(err) => return report(&host, &profile, &err),
    };

    match orchestrator::run(&host, &profile, &dirs, &cli.args) {
        Ok(code) => code,
        Err(err) => report(&host, &profile, &err),
    }
}

/// Single dispatch point: show the error with its phase-specific title and
/// hand back the fixed failure code.
fn report(host: &dyn Host, profile: &Profile, err: &LaunchError) -> i32 {
    host.show_error(&err.dialog_title(profile), &err.to_string());
    FAILURE_CODE
}
