//! Shared helpers for launcher end-to-end tests.
//!
//! The tests stage a fake installation in a temp directory: the launcher
//! binary under `<root>/bin/`, scripts next to it, and a per-user "Python"
//! install whose `python.exe` is a copy of `/bin/sh`. Scripts are therefore
//! plain shell, which lets every scenario observe arguments, environment and
//! exit codes without a real Python.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Helper to get the compiled launcher binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("flowforge");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "flowforge"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build flowforge binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// A staged installation layout in a temp directory.
pub struct Install {
    pub temp: TempDir,
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub local_app_data: PathBuf,
    pub python_exe: PathBuf,
}

impl Install {
    pub fn launcher(&self) -> PathBuf {
        self.bin_dir.join("flowforge")
    }

    /// Command running the staged launcher with discovery pointed at the
    /// staged per-user Python and nothing else.
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.launcher());
        command
            .env("LOCALAPPDATA", &self.local_app_data)
            .env_remove("PROGRAMFILES")
            .env_remove("PYTHONPATH")
            .env_remove("FLOWFORGE_BLOCKS_PATH")
            .env_remove("FLOWFORGE_LOG");
        command
    }

    /// Drop a script next to the launcher binary. Scripts are run through
    /// the staged interpreter, so no exec bit is needed.
    pub fn write_script(&self, name: &str, body: &str) {
        fs::write(self.bin_dir.join(name), body).unwrap();
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.bin_dir.join(name)).unwrap()
    }
}

/// Stage `<root>/bin/flowforge` plus a per-user Python install whose
/// interpreter is a copy of `/bin/sh`.
pub fn stage_install() -> Install {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("flowforge");
    let bin_dir = root.join("bin");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::copy(get_binary_path(), bin_dir.join("flowforge")).unwrap();

    let local_app_data = temp.path().join("localappdata");
    let python_dir = local_app_data
        .join("Programs")
        .join("Python")
        .join("Python39");
    fs::create_dir_all(&python_dir).unwrap();
    let python_exe = python_dir.join("python.exe");
    fs::copy("/bin/sh", &python_exe).unwrap();

    Install {
        temp,
        root,
        bin_dir,
        local_app_data,
        python_exe,
    }
}
