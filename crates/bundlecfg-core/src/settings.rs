//! Project settings file
//!
//! Settings sit between the built-in defaults and command-line overrides:
//!
//! 1. **Defaults** - [`Settings::default`]
//! 2. **Project file** - `bundlecfg.toml` in the project root, or an explicit path
//! 3. **Overrides** - applied by the caller (environment, flags) before
//!    calling [`Settings::into_inputs`]
//!
//! Every key is optional:
//!
//! ```toml
//! mode = "production"
//! source_dir = "src"
//! output_dir = "./dist"
//! image_limit = 30000
//!
//! [page]
//! title = "Dashboard"
//! description = "Internal dashboard"
//!
//! [dev_server]
//! port = 8080
//!
//! [fragments]
//! check_circular_dependencies = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assembly::AssemblyInputs;
use crate::catalog::{DEFAULT_DEV_SERVER_PORT, DEFAULT_IMAGE_LIMIT, DevServerOptions, PageOptions};
use crate::error::{Error, Result};
use crate::mode::BuildMode;
use crate::revision::RevisionSource;

/// File name looked up in the project root.
pub const SETTINGS_FILE: &str = "bundlecfg.toml";

/// Settings as written in `bundlecfg.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Build mode; kept as text so an unknown value is reported verbatim.
    pub mode: Option<String>,
    pub source_dir: String,
    pub output_dir: String,
    pub entry: String,
    pub platform: String,
    pub image_limit: u64,
    /// Fixed revision string; when unset the revision is read from git.
    pub revision: Option<String>,
    pub strict: bool,
    pub page: PageSettings,
    pub dev_server: DevServerSettings,
    pub static_resources: StaticSettings,
    pub fragments: OptionalFragments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub title: String,
    pub description: String,
    pub template: String,
    pub chunks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerSettings {
    pub port: u16,
    /// Served directory; defaults to the output directory.
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticSettings {
    pub source_base: String,
    pub output_dir: String,
}

/// Fragments that are off unless enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionalFragments {
    pub check_circular_dependencies: bool,
    pub load_javascript: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = AssemblyInputs::new(BuildMode::Development, ".");
        Self {
            mode: None,
            source_dir: defaults.source_dir,
            output_dir: defaults.output_dir,
            entry: defaults.entry,
            platform: defaults.platform,
            image_limit: DEFAULT_IMAGE_LIMIT,
            revision: None,
            strict: false,
            page: PageSettings::default(),
            dev_server: DevServerSettings::default(),
            static_resources: StaticSettings::default(),
            fragments: OptionalFragments::default(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        let page = PageOptions::default();
        Self {
            title: page.title,
            description: page.description,
            template: page.template,
            chunks: page.chunks,
        }
    }
}

impl Default for DevServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_DEV_SERVER_PORT,
            static_dir: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicitly named settings file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), "Loading settings");
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Load `bundlecfg.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(SETTINGS_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the build mode: an explicit `mode` wins over the file's.
    pub fn resolve_mode(&self, mode: Option<&str>) -> Result<BuildMode> {
        match mode.or(self.mode.as_deref()) {
            Some(name) => name.parse(),
            None => Err(Error::MissingMode),
        }
    }

    /// Produce assembly inputs for a project at `root`.
    pub fn into_inputs(self, mode: BuildMode, root: &Path) -> AssemblyInputs {
        let revision = match self.revision {
            Some(revision) => RevisionSource::Fixed(revision),
            None => RevisionSource::Git(root.to_path_buf()),
        };
        let static_dir = self
            .dev_server
            .static_dir
            .unwrap_or_else(|| self.output_dir.clone());

        AssemblyInputs {
            mode,
            root: root.to_path_buf(),
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            entry: self.entry,
            platform: self.platform,
            page: PageOptions {
                title: self.page.title,
                description: self.page.description,
                template: self.page.template,
                chunks: self.page.chunks,
            },
            static_source_base: self.static_resources.source_base,
            static_output_dir: self.static_resources.output_dir,
            image_limit: self.image_limit,
            dev_server: DevServerOptions {
                port: self.dev_server.port,
                static_dir,
            },
            revision,
            check_circular_dependencies: self.fragments.check_circular_dependencies,
            load_javascript: self.fragments.load_javascript,
            strict: self.strict,
        }
    }
}
