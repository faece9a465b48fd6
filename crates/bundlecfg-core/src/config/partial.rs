//! Partial configuration sections
//!
//! Every section is independently optional so a fragment can describe one
//! concern without touching the rest. Empty sections are skipped when
//! serializing, which keeps each fragment's JSON limited to what it sets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::plugin::PluginDescriptor;
use super::rule::Rule;
use crate::error::Result;
use crate::merge::Merge;

/// A tree-shaped configuration describing one or more concerns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    /// Named chunks and the modules they start from.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entry: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleOptions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Optimization>,

    /// Source-map style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<bool>,

    /// Sections without a typed model, merged as plain JSON.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules in declaration order, empty if no fragment set any.
    pub fn rules(&self) -> &[Rule] {
        self.module.as_ref().map_or(&[], |m| m.rules.as_slice())
    }

    /// First plugin constructed by `plugin`.
    pub fn plugin(&self, plugin: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.is(plugin))
    }

    pub fn minimizers(&self) -> &[PluginDescriptor] {
        self.optimization
            .as_ref()
            .map_or(&[], |o| o.minimizer.as_slice())
    }

    /// Merge `other` on top of this configuration and return the result.
    pub fn merged(mut self, other: PartialConfig) -> Self {
        self.merge_from(other);
        self
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Merge for PartialConfig {
    fn merge_from(&mut self, other: Self) {
        self.entry.merge_from(other.entry);
        self.resolve.merge_from(other.resolve);
        self.output.merge_from(other.output);
        self.module.merge_from(other.module);
        self.plugins.merge_from(other.plugins);
        self.optimization.merge_from(other.optimization);
        self.devtool.merge_from(other.devtool);
        self.watch.merge_from(other.watch);
        self.extra.merge_from(other.extra);
    }
}

/// Module resolution options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolve {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Replacements for node core modules; `false` stubs a module out.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fallback: BTreeMap<String, Value>,
}

impl Merge for Resolve {
    fn merge_from(&mut self, other: Self) {
        self.extensions.merge_from(other.extensions);
        self.fallback.merge_from(other.fallback);
    }
}

/// Where and how bundles are emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Empty the output directory before emitting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
}

impl Output {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Merge for Output {
    fn merge_from(&mut self, other: Self) {
        self.path.merge_from(other.path);
        self.filename.merge_from(other.filename);
        self.clean.merge_from(other.clean);
    }
}

/// The `module` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl ModuleOptions {
    pub fn with_rule(rule: Rule) -> Self {
        Self { rules: vec![rule] }
    }

    /// The first rule, in declaration order, that applies to `resource`.
    pub fn first_match(
        &self,
        resource: impl AsRef<Path>,
        issuer: Option<&Path>,
    ) -> Result<Option<&Rule>> {
        let resource = resource.as_ref();
        for rule in &self.rules {
            if rule.applies_to(resource, issuer)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }
}

impl Merge for ModuleOptions {
    fn merge_from(&mut self, other: Self) {
        self.rules.merge_from(other.rules);
    }
}

/// Optimization settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<PluginDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_chunks: Option<SplitChunks>,
}

impl Merge for Optimization {
    fn merge_from(&mut self, other: Self) {
        self.minimizer.merge_from(other.minimizer);
        self.split_chunks.merge_from(other.split_chunks);
    }
}

/// Code-splitting policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    /// Groups accumulate by name; a group declared twice merges field-wise.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cache_groups: BTreeMap<String, CacheGroup>,
}

impl Merge for SplitChunks {
    fn merge_from(&mut self, other: Self) {
        self.cache_groups.merge_from(other.cache_groups);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<ChunkSelection>,
}

impl Merge for CacheGroup {
    fn merge_from(&mut self, other: Self) {
        self.test.merge_from(other.test);
        self.name.merge_from(other.name);
        self.chunks.merge_from(other.chunks);
    }
}

/// Which chunks a cache group may split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    Initial,
    All,
    Async,
}

impl Merge for ChunkSelection {
    fn merge_from(&mut self, other: Self) {
        *self = other;
    }
}
