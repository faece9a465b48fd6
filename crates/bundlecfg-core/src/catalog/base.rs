//! Resolution, output and entry fragments

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Value, json};

use super::resolve_path;
use crate::config::{Output, PROVIDE_PLUGIN, PartialConfig, PluginDescriptor, Resolve};

const EXTENSIONS: [&str; 3] = [".ts", ".tsx", ".js"];

/// Node core modules stubbed out for browser builds.
const DISABLED_NODE_MODULES: [&str; 9] = [
    "fs", "tls", "net", "path", "zlib", "http", "https", "stream", "crypto",
];

/// Base project configuration.
///
/// Resolves `.ts`, `.tsx` and `.js` sources, stubs out node core modules,
/// emits `[name]-bundle.js` into `output_dir` (resolved against `root`) and
/// provides the browser `process` shim.
pub fn base(root: &Path, output_dir: &str) -> PartialConfig {
    let fallback = DISABLED_NODE_MODULES
        .iter()
        .map(|module| (module.to_string(), Value::Bool(false)))
        .collect::<BTreeMap<_, _>>();

    PartialConfig {
        resolve: Some(Resolve {
            extensions: EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            fallback,
        }),
        output: Some(Output {
            path: Some(resolve_path(root, output_dir)),
            filename: Some("[name]-bundle.js".to_string()),
            clean: None,
        }),
        plugins: vec![PluginDescriptor::with_options(
            PROVIDE_PLUGIN,
            json!({ "process": "process/browser" }),
        )],
        ..PartialConfig::default()
    }
}

/// A named entry chunk starting from `modules`, in order.
pub fn entry<I, S>(name: &str, modules: I) -> PartialConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PartialConfig {
        entry: BTreeMap::from([(
            name.to_string(),
            modules.into_iter().map(Into::into).collect(),
        )]),
        ..PartialConfig::default()
    }
}

/// Empty the output directory before each build.
pub fn clean() -> PartialConfig {
    PartialConfig {
        output: Some(Output {
            clean: Some(true),
            ..Output::default()
        }),
        ..PartialConfig::default()
    }
}
