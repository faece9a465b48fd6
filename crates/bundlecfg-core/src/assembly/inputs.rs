//! Fully resolved inputs for one assembly

use std::path::PathBuf;

use crate::catalog::{
    DEFAULT_IMAGE_LIMIT, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR, DevServerOptions, PageOptions,
};
use crate::mode::BuildMode;
use crate::revision::RevisionSource;

/// Everything the assembler needs, gathered before assembly starts.
///
/// The assembler never reads the process environment; callers resolve ports,
/// directories and the mode up front (see [`crate::settings::Settings`]).
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyInputs {
    pub mode: BuildMode,

    /// Project root; relative directories are resolved against it.
    pub root: PathBuf,

    pub source_dir: String,
    pub output_dir: String,

    /// Module the `main` chunk starts from.
    pub entry: String,

    /// Value compiled in as `process.env.PLATFORM`.
    pub platform: String,

    pub page: PageOptions,

    /// Base directory holding `public/`, relative to the root.
    pub static_source_base: String,

    /// Where copied static files land, relative to the output directory.
    pub static_output_dir: String,

    pub image_limit: u64,
    pub dev_server: DevServerOptions,
    pub revision: RevisionSource,

    /// Fail production builds on import cycles.
    pub check_circular_dependencies: bool,

    /// Transpile plain `.js` sources with babel.
    pub load_javascript: bool,

    /// Reject fragments that overwrite each other's scalar values.
    pub strict: bool,
}

impl AssemblyInputs {
    /// Defaults for a project at `root`, describing its revision from git.
    pub fn new(mode: BuildMode, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            mode,
            revision: RevisionSource::Git(root.clone()),
            root,
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            entry: "./src/index.tsx".to_string(),
            platform: "site".to_string(),
            page: PageOptions::default(),
            static_source_base: String::new(),
            static_output_dir: String::new(),
            image_limit: DEFAULT_IMAGE_LIMIT,
            dev_server: DevServerOptions::default(),
            check_circular_dependencies: false,
            load_javascript: false,
            strict: false,
        }
    }

    pub fn with_revision(mut self, revision: RevisionSource) -> Self {
        self.revision = revision;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
