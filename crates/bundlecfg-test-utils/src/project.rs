//! [`TestProject`] builder for assembly scenarios.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A temporary project root.
///
/// # Example
///
/// ```rust,no_run
/// use bundlecfg_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.write_settings("mode = \"production\"\n");
/// project.init_git_with_tag("v1.0.0");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `bundlecfg.toml` with the given content.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.root().join("bundlecfg.toml"), content)
            .unwrap_or_else(|e| panic!("write_settings: failed to write bundlecfg.toml: {e}"));
    }

    /// Make the project a git repository whose only commit is tagged `tag`.
    pub fn init_git_with_tag(&self, tag: &str) {
        crate::git::tagged_repo(self.root(), tag);
    }
}
