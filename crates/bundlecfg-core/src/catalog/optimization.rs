//! Code splitting and minification

use std::collections::BTreeMap;

use crate::config::{
    CacheGroup, ChunkSelection, Optimization, PartialConfig, PluginDescriptor, SplitChunks,
    TERSER_PLUGIN,
};

/// Split everything imported from `node_modules` by the initial chunks into a
/// shared `vendor` chunk.
pub fn split_chunks() -> PartialConfig {
    let commons = CacheGroup {
        test: Some(r"[\\/]node_modules[\\/]".to_string()),
        name: Some("vendor".to_string()),
        chunks: Some(ChunkSelection::Initial),
    };

    PartialConfig {
        optimization: Some(Optimization {
            split_chunks: Some(SplitChunks {
                cache_groups: BTreeMap::from([("commons".to_string(), commons)]),
            }),
            ..Optimization::default()
        }),
        ..PartialConfig::default()
    }
}

/// Minify emitted JavaScript with Terser.
pub fn minify_javascript() -> PartialConfig {
    PartialConfig {
        optimization: Some(Optimization {
            minimizer: vec![PluginDescriptor::new(TERSER_PLUGIN)],
            ..Optimization::default()
        }),
        ..PartialConfig::default()
    }
}
