//! Plugin attachment fragments

use std::path::Path;

use serde_json::{Map, Value, json};

use super::join_pattern;
use crate::config::{
    BANNER_PLUGIN, CIRCULAR_DEPENDENCY_PLUGIN, COPY_PLUGIN, DEFINE_PLUGIN, HTML_PLUGIN,
    PartialConfig, PluginDescriptor,
};
use crate::error::Result;
use crate::revision::RevisionSource;

fn plugin_fragment(plugin: PluginDescriptor) -> PartialConfig {
    PartialConfig {
        plugins: vec![plugin],
        ..PartialConfig::default()
    }
}

/// Options for the generated HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub description: String,
    /// Template file, relative to the project root.
    pub template: String,
    /// Entry chunks injected into the page.
    pub chunks: Vec<String>,
}

impl PageOptions {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            template: "./src/index.html".to_string(),
            chunks: vec!["main".to_string()],
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::new("Template", "Template")
    }
}

/// Generate an HTML page with only a title in its template context.
pub fn page(title: &str) -> PartialConfig {
    plugin_fragment(PluginDescriptor::with_options(
        HTML_PLUGIN,
        json!({ "context": { "title": title } }),
    ))
}

/// Generate the site's HTML page from its template.
pub fn site_page(options: &PageOptions) -> PartialConfig {
    plugin_fragment(PluginDescriptor::with_options(
        HTML_PLUGIN,
        json!({
            "context": {
                "title": options.title,
                "description": options.description,
            },
            "template": options.template,
            "chunks": options.chunks,
        }),
    ))
}

/// Replace identifiers at compile time. Values are source expressions, so a
/// string literal must carry its own quotes.
pub fn define<I, K, V>(definitions: I) -> PartialConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let options = definitions
        .into_iter()
        .map(|(key, value)| (key.into(), Value::String(value.into())))
        .collect::<Map<_, _>>();
    plugin_fragment(PluginDescriptor::with_options(
        DEFINE_PLUGIN,
        Value::Object(options),
    ))
}

/// Define `process.env.PLATFORM` as the string literal `platform`.
pub fn define_platform(platform: &str) -> PartialConfig {
    define([("process.env.PLATFORM", format!("\"{platform}\""))])
}

/// Copy `source_base/public/*.*` into `output_dir`, keeping file names.
pub fn load_static_resources(source_base: &str, output_dir: &str) -> PartialConfig {
    plugin_fragment(PluginDescriptor::with_options(
        COPY_PLUGIN,
        json!({
            "patterns": [{
                "from": join_pattern(source_base, "public/*.*"),
                "to": join_pattern(output_dir, "[name][ext]"),
            }],
        }),
    ))
}

/// Fail the build on import cycles under `src`, ignoring `node_modules`.
///
/// `cwd` is only used by the plugin to display module paths.
pub fn check_circular_dependencies(cwd: &Path) -> PartialConfig {
    plugin_fragment(PluginDescriptor::with_options(
        CIRCULAR_DEPENDENCY_PLUGIN,
        json!({
            "exclude": r"a\.js|node_modules",
            "include": "src",
            "failOnError": true,
            "allowAsyncCycles": false,
            "cwd": cwd.to_string_lossy(),
        }),
    ))
}

/// Prefix every bundle with the current revision.
///
/// Fails when the revision source cannot be read; the error is returned
/// unchanged.
pub fn attach_revision(source: &RevisionSource) -> Result<PartialConfig> {
    let banner = source.version()?;
    Ok(plugin_fragment(PluginDescriptor::with_options(
        BANNER_PLUGIN,
        json!({ "banner": banner }),
    )))
}
