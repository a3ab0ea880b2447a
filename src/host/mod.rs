//! Host services seam.
//!
//! Everything the launcher needs from the operating system goes through the
//! [`Host`] trait: environment reads/writes, the registry, filesystem
//! existence checks, executable architecture inspection, process creation and
//! the two user-facing dialogs. Keeping the surface this narrow is what lets
//! discovery, environment composition and orchestration run against a fake
//! host in tests.

mod machine;
mod native;

use std::io;
use std::path::Path;

pub use native::NativeHost;

/// Narrow platform interface used by every launcher component.
pub trait Host {
    /// Read an environment variable. Unset and empty both come back as
    /// `None`; callers never distinguish the two.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Write an environment variable in the launcher's own process, so the
    /// value is inherited by subsequently spawned children.
    fn set_env_var(&self, name: &str, value: &str) -> io::Result<()>;

    /// Read the default string value of a registry subkey under HKLM.
    /// Missing keys and platforms without a registry both yield `None`.
    fn registry_string(&self, subkey: &str) -> Option<String>;

    /// Whether a file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Whether the executable at `path` reports a 64-bit architecture.
    fn binary_is_64bit(&self, path: &Path) -> bool;

    /// Spawn `command` (executable plus arguments) and block until it exits,
    /// returning its exit code. `hide_window` suppresses the console window
    /// on Windows.
    fn spawn_and_wait(&self, command: &[String], hide_window: bool) -> io::Result<i32>;

    /// Show a modal error dialog.
    fn show_error(&self, title: &str, message: &str);

    /// Show a modal yes/no question; `true` means yes.
    fn confirm(&self, title: &str, message: &str) -> bool;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory host used by unit tests across the crate.

    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::io;
    use std::path::{Path, PathBuf};

    use super::Host;

    #[derive(Default)]
    pub(crate) struct FakeHost {
        env: RefCell<HashMap<String, String>>,
        registry: HashMap<String, String>,
        files: HashSet<PathBuf>,
        sixty_four_bit: HashSet<PathBuf>,
        pub(crate) fail_env_writes: Cell<bool>,
        pub(crate) confirm_answer: Cell<bool>,
        spawn_results: RefCell<VecDeque<io::Result<i32>>>,
        pub(crate) spawned: RefCell<Vec<(Vec<String>, bool)>>,
        pub(crate) errors_shown: RefCell<Vec<(String, String)>>,
        pub(crate) confirms_asked: RefCell<Vec<String>>,
    }

    impl FakeHost {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_env(self, name: &str, value: &str) -> Self {
            self.env
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            self
        }

        pub(crate) fn with_registry(mut self, subkey: &str, value: &str) -> Self {
            self.registry
                .insert(subkey.to_string(), value.to_string());
            self
        }

        /// Register an existing file; `sixty_four_bit` marks it as a 64-bit
        /// executable for the architecture check.
        pub(crate) fn with_file(mut self, path: impl Into<PathBuf>, sixty_four_bit: bool) -> Self {
            let path = path.into();
            if sixty_four_bit {
                self.sixty_four_bit.insert(path.clone());
            }
            self.files.insert(path);
            self
        }

        /// Queue the result of the next spawn. Spawns beyond the queued
        /// results fail, so tests notice unexpected launches.
        pub(crate) fn with_spawn_result(self, result: io::Result<i32>) -> Self {
            self.spawn_results.borrow_mut().push_back(result);
            self
        }

        pub(crate) fn answering(self, yes: bool) -> Self {
            self.confirm_answer.set(yes);
            self
        }

        pub(crate) fn env_value(&self, name: &str) -> Option<String> {
            self.env.borrow().get(name).cloned()
        }
    }

    impl Host for FakeHost {
        fn env_var(&self, name: &str) -> Option<String> {
            self.env
                .borrow()
                .get(name)
                .filter(|v| !v.is_empty())
                .cloned()
        }

        fn set_env_var(&self, name: &str, value: &str) -> io::Result<()> {
            if self.fail_env_writes.get() {
                return Err(io::Error::other("environment write rejected"));
            }
            self.env
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn registry_string(&self, subkey: &str) -> Option<String> {
            self.registry.get(subkey).cloned()
        }

        fn file_exists(&self, path: &Path) -> bool {
            self.files.contains(path)
        }

        fn binary_is_64bit(&self, path: &Path) -> bool {
            self.sixty_four_bit.contains(path)
        }

        fn spawn_and_wait(&self, command: &[String], hide_window: bool) -> io::Result<i32> {
            self.spawned
                .borrow_mut()
                .push((command.to_vec(), hide_window));
            self.spawn_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::other("unexpected spawn")))
        }

        fn show_error(&self, title: &str, message: &str) {
            self.errors_shown
                .borrow_mut()
                .push((title.to_string(), message.to_string()));
        }

        fn confirm(&self, _title: &str, message: &str) -> bool {
            self.confirms_asked.borrow_mut().push(message.to_string());
            self.confirm_answer.get()
        }
    }
}
