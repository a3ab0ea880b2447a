//! # flowforge-launcher
//!
//! Native launcher stub for the FlowForge flowgraph editor. The binary ships
//! as `<install-root>/bin/flowforge.exe` next to the application entry script
//! and does three things: find a 64-bit Python installation on the host, set
//! up the environment so the script can locate its bundled dependencies, and
//! run the script, forwarding any command line arguments verbatim.
//!
//! If the application starts but exits with a non-zero code, the launcher
//! offers to run the bundled diagnostic helper script before giving up.
//!
//! All platform access (registry, environment, dialogs, process creation)
//! goes through the [`host::Host`] trait so the discovery, environment and
//! launch logic stay testable without a Windows machine.

pub mod cli;
pub mod env;
pub mod error;
pub mod host;
pub mod launch;
pub mod locate;
pub mod orchestrator;
pub mod paths;
pub mod profile;
