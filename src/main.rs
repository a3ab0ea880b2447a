//! Entry point for the FlowForge launcher binary.
//!
//! The process exit code is either the launched script's own exit code (or
//! the diagnostic helper's, if recovery ran) or the fixed failure code when
//! discovery, configuration or the spawn itself failed.

fn main() {
    std::process::exit(flowforge_launcher::cli::run_cli());
}
