//! Module transformation rules
//!
//! Declaration order matters when these are combined: the SVGR rule must come
//! before the plain SVG rule so components imported from TypeScript pick it
//! up first.

use std::path::Path;

use super::resolve_path;
use crate::config::{ModuleOptions, PartialConfig, Rule};

fn rule_fragment(rule: Rule) -> PartialConfig {
    PartialConfig {
        module: Some(ModuleOptions::with_rule(rule)),
        ..PartialConfig::default()
    }
}

/// Compile `.ts`/`.tsx` under `root/src` with `ts-loader`.
pub fn load_typescript(root: &Path, src: &str) -> PartialConfig {
    rule_fragment(
        Rule::new(r"\.tsx?$")
            .include(resolve_path(root, src))
            .exclude("node_modules")
            .handlers(["ts-loader"]),
    )
}

/// Inject stylesheets: `style-loader` runs on the output of `css-loader`.
pub fn load_css() -> PartialConfig {
    rule_fragment(Rule::new(r"\.css$").handlers(["style-loader", "css-loader"]))
}

/// Transpile application JavaScript under `app_source` with `babel-loader`.
pub fn load_javascript(app_source: &Path) -> PartialConfig {
    rule_fragment(
        Rule::new(r"\.js$")
            .include(app_source)
            .handlers(["babel-loader"]),
    )
}

/// SVGs imported from TypeScript become React components.
pub fn load_svgr() -> PartialConfig {
    rule_fragment(
        Rule::new(r"\.svg$")
            .issuer(r"\.tsx?$")
            .handlers(["@svgr/webpack", "asset"]),
    )
}

/// SVGs imported from anywhere else are plain assets.
pub fn load_svg() -> PartialConfig {
    rule_fragment(Rule::new(r"\.svg$").handlers(["asset"]))
}

/// Images and audio become assets, inlined when smaller than `limit` bytes.
///
/// [`DEFAULT_IMAGE_LIMIT`](super::DEFAULT_IMAGE_LIMIT) is the usual threshold.
pub fn load_images(limit: u64) -> PartialConfig {
    rule_fragment(
        Rule::new(r"\.(jpg|jpeg|png|gif|mp3)$")
            .asset_type("asset")
            .inline_below(limit),
    )
}
