//! Fragment catalog
//!
//! Each function here returns a [`PartialConfig`](crate::config::PartialConfig)
//! describing exactly one concern and touching only the sections that concern
//! needs. Functions are deterministic in their parameters: calling one twice
//! with the same arguments yields structurally equal values. Nothing in the
//! catalog reads the process environment; ports, directories and revisions are
//! passed in.
//!
//! | Module | Concerns |
//! |--------|----------|
//! | [`base`] | resolution, output location, entry chunks, cleanup |
//! | [`loaders`] | TypeScript, JavaScript, CSS, SVG and image rules |
//! | [`plugins`] | HTML page, defines, static copies, revision banner, cycle checks |
//! | [`optimization`] | code splitting and minification |
//! | [`devtools`] | dev server and source maps |

pub mod base;
pub mod devtools;
pub mod loaders;
pub mod optimization;
pub mod plugins;

use std::path::{Component, Path, PathBuf};

pub use base::{base, clean, entry};
pub use devtools::{DevServerOptions, dev_server, generate_source_maps};
pub use loaders::{load_css, load_images, load_javascript, load_svg, load_svgr, load_typescript};
pub use optimization::{minify_javascript, split_chunks};
pub use plugins::{
    PageOptions, attach_revision, check_circular_dependencies, define, define_platform,
    load_static_resources, page, site_page,
};

/// Default bundle output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "./dist";

/// Default application source directory, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Images below this many bytes are inlined as data URLs.
pub const DEFAULT_IMAGE_LIMIT: u64 = 30_000;

pub const DEFAULT_DEV_SERVER_PORT: u16 = 5000;

/// Join `relative` onto `root`, dropping `.` and folding `..` lexically.
///
/// A `..` that climbs above a relative root is kept; one that climbs above
/// the filesystem root is dropped.
pub(crate) fn resolve_path(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in root.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => resolved.push(Component::ParentDir),
            },
            other => resolved.push(other),
        }
    }
    if resolved.as_os_str().is_empty() {
        resolved.push(Component::CurDir);
    }
    resolved
}

/// Join two glob-style path fragments with `/`, skipping an empty base.
pub(crate) fn join_pattern(base: &str, tail: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        tail.to_string()
    } else {
        format!("{base}/{tail}")
    }
}
