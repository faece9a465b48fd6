//! The assembled configuration

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use super::partial::PartialConfig;
use super::plugin::{PluginDescriptor, SERVE_PLUGIN};
use crate::error::Result;
use crate::mode::BuildMode;

/// The merged configuration for one build mode.
///
/// Produced once by the assembler and never mutated afterwards; it only
/// hands out shared references to its sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalConfig {
    mode: BuildMode,

    #[serde(flatten)]
    config: PartialConfig,
}

impl FinalConfig {
    pub(crate) fn stamp(mode: BuildMode, config: PartialConfig) -> Self {
        Self { mode, config }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn config(&self) -> &PartialConfig {
        &self.config
    }

    /// The dev-server plugin, present only in development builds.
    pub fn dev_server(&self) -> Option<&PluginDescriptor> {
        self.config.plugin(SERVE_PLUGIN)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Deref for FinalConfig {
    type Target = PartialConfig;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
