//! Launcher error taxonomy.
//!
//! Every failure the launcher can hit is one of five kinds, each terminal for
//! its phase: the error is shown once in a dialog with a phase-specific title
//! and the process exits with [`crate::cli::FAILURE_CODE`]. A launched script
//! that exits non-zero is *not* an error here; that case goes through the
//! recovery prompt instead (see [`crate::orchestrator`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::profile::Profile;

/// A terminal launcher failure.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The launcher could not work out where its own binary lives.
    #[error("Failed to resolve the launcher's own location!\n{reason}")]
    Resolution { reason: String },

    /// No usable Python installation was found. The report enumerates every
    /// candidate that was checked and the registry key that was consulted.
    #[error("{report}")]
    Discovery { report: String },

    /// A script the launcher needs (entry point or diagnostic helper) is
    /// missing from the installation.
    #[error("{path} does not exist!\nPossible installation issue.", path = .path.display())]
    Location { path: PathBuf },

    /// Writing an environment variable failed.
    #[error("Failed to set environment variable {name}: {source}")]
    Environment {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The operating system refused to create the child process.
    #[error("Failed to execute: {command}\n{source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Dialog title for this error kind. This is the single place mapping
    /// error kinds to user-facing titles.
    #[must_use]
    pub fn dialog_title(&self, profile: &Profile) -> String {
        match self {
            Self::Resolution { .. } => format!("{} launcher location failed!", profile.app_name),
            Self::Discovery { .. } => {
                format!("Python {} inspection failed!", profile.python_version)
            }
            Self::Location { .. } => format!("{} location failed!", profile.app_name),
            Self::Environment { .. } => format!("{} environment setup failed!", profile.app_name),
            Self::Spawn { .. } => format!("{} exec failed!", profile.app_name),
        }
    }
}
