//! Python interpreter discovery.
//!
//! Plausible install locations are generated in a fixed priority order and
//! validated against the filesystem and the binary's reported architecture.
//! The first candidate that exists and is 64-bit wins; if none does, the
//! error carries a report of every attempt so the dialog is actionable
//! instead of a bare "Python not found".

use std::fmt::Write as _;
use std::path::PathBuf;

use log::debug;

use crate::error::LaunchError;
use crate::host::Host;
use crate::profile::Profile;

/// Where a candidate path came from. Order of the variants is the search
/// priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// Per-user install under `%LOCALAPPDATA%\Programs\Python`.
    LocalUser,
    /// Machine-wide install under `%PROGRAMFILES%`.
    GlobalUser,
    /// Install directory declared in the registry by the Python installer.
    Registry,
}

impl CandidateSource {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LocalUser => "local user",
            Self::GlobalUser => "all users",
            Self::Registry => "registry",
        }
    }
}

/// One plausible interpreter location, not yet validated. `path` is `None`
/// when the source had nothing to offer (unset variable, missing registry
/// key); such candidates are skipped silently.
#[derive(Debug, Clone)]
struct Candidate {
    source: CandidateSource,
    path: Option<PathBuf>,
}

/// Generate candidates in fixed priority order: local user, all users,
/// registry.
fn candidates(host: &dyn Host, profile: &Profile) -> Vec<Candidate> {
    let digits = profile.version_digits();
    vec![
        Candidate {
            source: CandidateSource::LocalUser,
            path: host.env_var("LOCALAPPDATA").map(|dir| {
                PathBuf::from(dir)
                    .join("Programs")
                    .join("Python")
                    .join(format!("Python{digits}"))
                    .join("python.exe")
            }),
        },
        Candidate {
            source: CandidateSource::GlobalUser,
            path: host.env_var("PROGRAMFILES").map(|dir| {
                PathBuf::from(dir)
                    .join(format!("Python{digits}"))
                    .join("python.exe")
            }),
        },
        Candidate {
            source: CandidateSource::Registry,
            path: host
                .registry_string(&profile.registry_key())
                .map(|dir| PathBuf::from(dir).join("python.exe")),
        },
    ]
}

/// Find a usable interpreter: the first candidate, in priority order, that
/// exists and reports a 64-bit architecture.
///
/// # Errors
///
/// Returns [`LaunchError::Discovery`] when no candidate qualifies. The report
/// lists every non-empty candidate with the reason it was rejected
/// (`not found` or `not amd64`) and names the registry key that was
/// consulted, whether or not it held a value.
pub fn locate(host: &dyn Host, profile: &Profile) -> Result<PathBuf, LaunchError> {
    let mut attempts = Vec::new();

    for candidate in candidates(host, profile) {
        let Some(path) = candidate.path else {
            debug!("{} candidate: nothing to check", candidate.source.label());
            continue;
        };
        if !host.file_exists(&path) {
            debug!("{}: not found", path.display());
            attempts.push((path, candidate.source, "not found"));
            continue;
        }
        if !host.binary_is_64bit(&path) {
            debug!("{}: not amd64", path.display());
            attempts.push((path, candidate.source, "not amd64"));
            continue;
        }
        debug!("using {} ({})", path.display(), candidate.source.label());
        return Ok(path);
    }

    Err(LaunchError::Discovery {
        report: failure_report(profile, &attempts),
    })
}

fn failure_report(profile: &Profile, attempts: &[(PathBuf, CandidateSource, &str)]) -> String {
    let mut report = format!(
        "No usable 64-bit Python {} installation was found.\n",
        profile.python_version
    );
    for (path, source, reason) in attempts {
        let _ = writeln!(report, "  {} ({}): {reason}", path.display(), source.label());
    }
    let _ = writeln!(report, "Registry key consulted: HKLM\\{}", profile.registry_key());
    let _ = write!(report, "Is Python {} installed?", profile.python_version);
    report
}
