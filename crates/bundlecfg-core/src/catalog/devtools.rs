//! Dev server and source maps

use serde_json::json;

use super::{DEFAULT_DEV_SERVER_PORT, DEFAULT_OUTPUT_DIR};
use crate::config::{PartialConfig, PluginDescriptor, SERVE_PLUGIN};

/// Fast rebuilds with original sources, for development.
pub const EVAL_SOURCE_MAP: &str = "eval-source-map";

/// Separate full source-map files, for production.
pub const SOURCE_MAP: &str = "source-map";

/// Settings handed to the static file server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevServerOptions {
    pub port: u16,
    /// Directory served as static content.
    pub static_dir: String,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_DEV_SERVER_PORT,
            static_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Watch sources and serve the build with live reload.
pub fn dev_server(options: &DevServerOptions) -> PartialConfig {
    PartialConfig {
        watch: Some(true),
        plugins: vec![PluginDescriptor::with_options(
            SERVE_PLUGIN,
            json!({
                "port": options.port,
                "static": options.static_dir,
                "liveReload": true,
                "waitForBuild": true,
            }),
        )],
        ..PartialConfig::default()
    }
}

/// Emit source maps of the given kind.
pub fn generate_source_maps(kind: &str) -> PartialConfig {
    PartialConfig {
        devtool: Some(kind.to_string()),
        ..PartialConfig::default()
    }
}
