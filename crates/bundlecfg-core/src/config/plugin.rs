//! Opaque plugin descriptors
//!
//! The merge engine never looks inside a descriptor; plugin lists only ever
//! grow by concatenation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROVIDE_PLUGIN: &str = "ProvidePlugin";
pub const DEFINE_PLUGIN: &str = "DefinePlugin";
pub const BANNER_PLUGIN: &str = "BannerPlugin";
pub const HTML_PLUGIN: &str = "HtmlWebpackPlugin";
pub const COPY_PLUGIN: &str = "CopyPlugin";
pub const CIRCULAR_DEPENDENCY_PLUGIN: &str = "CircularDependencyPlugin";
pub const TERSER_PLUGIN: &str = "TerserPlugin";
pub const SERVE_PLUGIN: &str = "WebpackPluginServe";

/// A configured extension: the constructor name plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub plugin: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    /// A plugin constructed without options.
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(plugin: impl Into<String>, options: Value) -> Self {
        Self {
            plugin: plugin.into(),
            options,
        }
    }

    pub fn is(&self, plugin: &str) -> bool {
        self.plugin == plugin
    }

    /// Look up a top-level option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plugin_without_options_omits_field() {
        let value = serde_json::to_value(PluginDescriptor::new(TERSER_PLUGIN)).unwrap();
        assert_eq!(value, json!({ "plugin": "TerserPlugin" }));
    }

    #[test]
    fn option_lookup() {
        let plugin = PluginDescriptor::with_options(BANNER_PLUGIN, json!({ "banner": "v1" }));
        assert!(plugin.is(BANNER_PLUGIN));
        assert_eq!(plugin.option("banner"), Some(&json!("v1")));
        assert_eq!(plugin.option("missing"), None);
    }
}
