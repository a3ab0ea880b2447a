//! One-shot process launching.
//!
//! A [`LaunchSpec`] pins down the exact command line: interpreter, script,
//! then any extra arguments in order. The spawn is synchronous; the calling
//! thread blocks until the child exits, with no timeout and no cancellation.

use std::path::PathBuf;

use crate::error::LaunchError;
use crate::host::Host;

/// A fully determined launch command. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub executable: PathBuf,
    pub script: PathBuf,
    pub extra_args: Vec<String>,
}

impl LaunchSpec {
    #[must_use]
    pub fn new(executable: PathBuf, script: PathBuf, extra_args: Vec<String>) -> Self {
        Self {
            executable,
            script,
            extra_args,
        }
    }

    /// The argument vector as spawned: executable, script, extra arguments.
    #[must_use]
    pub fn command(&self) -> Vec<String> {
        let mut command = vec![
            self.executable.to_string_lossy().into_owned(),
            self.script.to_string_lossy().into_owned(),
        ];
        command.extend(self.extra_args.iter().cloned());
        command
    }
}

/// The terminal outcome of a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub exit_code: i32,
}

/// Render a command the way the Windows host passes it to the OS: each
/// argument wrapped in quotes, joined with single spaces. Embedded quote
/// characters are deliberately not escaped; install scripts depend on this
/// exact command line.
#[must_use]
pub fn command_line(command: &[String]) -> String {
    command
        .iter()
        .map(|arg| format!("\"{arg}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spawn the command described by `spec` and wait for it to finish.
///
/// # Errors
///
/// Returns [`LaunchError::Spawn`] when the OS cannot create the process. A
/// child that starts and exits non-zero is a successful `run`; handling that
/// exit code is the orchestrator's job.
pub fn run(
    host: &dyn Host,
    spec: &LaunchSpec,
    hide_window: bool,
) -> Result<ProcessResult, LaunchError> {
    let command = spec.command();
    match host.spawn_and_wait(&command, hide_window) {
        Ok(exit_code) => Ok(ProcessResult { exit_code }),
        Err(source) => Err(LaunchError::Spawn {
            command: command_line(&command),
            source,
        }),
    }
}
