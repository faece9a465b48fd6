//! Configuration data model
//!
//! [`PartialConfig`] is what fragments produce and the merge engine folds;
//! [`FinalConfig`] is the merged result with the build mode stamped in.

mod final_config;
mod partial;
mod plugin;
mod rule;

pub use final_config::FinalConfig;
pub use partial::{
    CacheGroup, ChunkSelection, ModuleOptions, Optimization, Output, PartialConfig, Resolve,
    SplitChunks,
};
pub use plugin::{
    BANNER_PLUGIN, CIRCULAR_DEPENDENCY_PLUGIN, COPY_PLUGIN, DEFINE_PLUGIN, HTML_PLUGIN,
    PROVIDE_PLUGIN, PluginDescriptor, SERVE_PLUGIN, TERSER_PLUGIN,
};
pub use rule::{DataUrlCondition, Rule, RuleParser};
