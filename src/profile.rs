//! Launch profile: the fixed facts about the application being launched.
//!
//! The launcher deliberately reads no configuration file; everything that
//! varies between installs is discovered at run time, and everything that
//! does not is a field here.

use std::path::{Path, PathBuf};

/// Names and version requirements for the launched application.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Display name used in dialog titles and prompts.
    pub app_name: String,
    /// Entry script, expected next to the launcher binary.
    pub entry_script: String,
    /// Diagnostic helper script, expected next to the launcher binary.
    pub helper_script: String,
    /// Python version the application requires, e.g. "3.9".
    pub python_version: String,
    /// Environment variable holding the application resource search path.
    pub resource_path_var: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            app_name: "FlowForge".to_string(),
            entry_script: "flowforge.py".to_string(),
            helper_script: "FlowForgeHelper.py".to_string(),
            python_version: "3.9".to_string(),
            resource_path_var: "FLOWFORGE_BLOCKS_PATH".to_string(),
        }
    }
}

impl Profile {
    /// Version digits as they appear in install directory names and registry
    /// keys: "3.9" becomes "39", "3.11" becomes "311".
    #[must_use]
    pub fn version_digits(&self) -> String {
        self.python_version
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Registry subkey (under HKLM) whose default value is the interpreter's
    /// install directory.
    #[must_use]
    pub fn registry_key(&self) -> String {
        format!(
            "SOFTWARE\\Python\\PythonCore\\{}\\InstallPath",
            self.python_version
        )
    }

    /// Package search path injected into PYTHONPATH, relative to the install
    /// root.
    #[must_use]
    pub fn module_search_path(&self, root: &Path) -> PathBuf {
        root.join("lib").join("site-packages")
    }

    /// Application resource search path (block definitions), relative to the
    /// install root.
    #[must_use]
    pub fn resource_search_path(&self, root: &Path) -> PathBuf {
        root.join("share").join("flowforge").join("blocks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_digits_strips_separators() {
        let mut profile = Profile::default();
        assert_eq!(profile.version_digits(), "39");

        profile.python_version = "3.11".to_string();
        assert_eq!(profile.version_digits(), "311");

        profile.python_version = "2.7".to_string();
        assert_eq!(profile.version_digits(), "27");
    }

    #[test]
    fn test_registry_key_uses_dotted_version() {
        let profile = Profile::default();
        assert_eq!(
            profile.registry_key(),
            "SOFTWARE\\Python\\PythonCore\\3.9\\InstallPath"
        );
    }

    #[test]
    fn test_search_paths_derive_from_root() {
        let profile = Profile::default();
        let root = Path::new("/opt/flowforge");
        assert_eq!(
            profile.module_search_path(root),
            Path::new("/opt/flowforge/lib/site-packages")
        );
        assert_eq!(
            profile.resource_search_path(root),
            Path::new("/opt/flowforge/share/flowforge/blocks")
        );
    }
}
