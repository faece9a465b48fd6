//! Mode assembler
//!
//! Assembly runs in four steps:
//!
//! 1. Build the common fragment list, which applies in every mode.
//! 2. Append the fragment list for the requested [`BuildMode`].
//! 3. Fold everything through the merge engine.
//! 4. Stamp the mode into the resulting [`FinalConfig`].
//!
//! Both lists have a fixed declared order. Rules and plugins concatenate in
//! that order, so for example the SVGR rule is declared ahead of the plain SVG
//! rule and wins for components imported from TypeScript.
//!
//! # Example
//!
//! ```no_run
//! use bundlecfg_core::{AssemblyInputs, BuildMode, RevisionSource, assemble};
//!
//! let inputs = AssemblyInputs::new(BuildMode::Production, "/path/to/app")
//!     .with_revision(RevisionSource::Fixed("v1.0.0".to_string()));
//! let config = assemble(inputs)?;
//! assert!(config.dev_server().is_none());
//! # Ok::<(), bundlecfg_core::Error>(())
//! ```

mod conflicts;
mod fragments;
mod inputs;

pub use conflicts::{ScalarConflict, find_scalar_conflicts};
pub use fragments::{FragmentList, NamedFragment};
pub use inputs::AssemblyInputs;

use crate::catalog::{self, devtools};
use crate::config::FinalConfig;
use crate::error::Result;
use crate::mode::BuildMode;

/// Entry module that connects the page to the dev server.
const DEV_CLIENT_ENTRY: &str = "webpack-plugin-serve/client";

/// Builds the fragment lists for one set of inputs and merges them.
#[derive(Debug, Clone)]
pub struct Assembler {
    inputs: AssemblyInputs,
}

impl Assembler {
    pub fn new(inputs: AssemblyInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &AssemblyInputs {
        &self.inputs
    }

    /// Fragments applied in every mode, in merge order.
    ///
    /// Fails if a fragment cannot be built, e.g. when the revision source is
    /// unavailable.
    pub fn common_fragments(&self) -> Result<FragmentList> {
        let inputs = &self.inputs;
        let mut list = FragmentList::new();

        list.push("base", catalog::base(&inputs.root, &inputs.output_dir))
            .push("entry", catalog::entry("main", [inputs.entry.as_str()]))
            .push("define_platform", catalog::define_platform(&inputs.platform))
            .push("site_page", catalog::site_page(&inputs.page))
            .push(
                "load_static_resources",
                catalog::load_static_resources(
                    &inputs.static_source_base,
                    &inputs.static_output_dir,
                ),
            )
            .push("load_css", catalog::load_css())
            .push(
                "load_typescript",
                catalog::load_typescript(&inputs.root, &inputs.source_dir),
            );

        if inputs.load_javascript {
            let app_source = catalog::resolve_path(&inputs.root, &inputs.source_dir);
            list.push("load_javascript", catalog::load_javascript(&app_source));
        }

        list.push("load_images", catalog::load_images(inputs.image_limit))
            .push("load_svgr", catalog::load_svgr())
            .push("load_svg", catalog::load_svg())
            .push("clean", catalog::clean())
            .push("attach_revision", catalog::attach_revision(&inputs.revision)?);

        Ok(list)
    }

    /// Fragments specific to the build mode, in merge order.
    pub fn mode_fragments(&self) -> FragmentList {
        let inputs = &self.inputs;
        let mut list = FragmentList::new();

        match inputs.mode {
            BuildMode::Development => {
                list.push("dev_client_entry", catalog::entry("main", [DEV_CLIENT_ENTRY]))
                    .push("dev_server", catalog::dev_server(&inputs.dev_server))
                    .push("split_chunks", catalog::split_chunks())
                    .push(
                        "source_maps",
                        catalog::generate_source_maps(devtools::EVAL_SOURCE_MAP),
                    );
            }
            BuildMode::Production => {
                list.push("split_chunks", catalog::split_chunks())
                    .push("minify_javascript", catalog::minify_javascript())
                    .push(
                        "source_maps",
                        catalog::generate_source_maps(devtools::SOURCE_MAP),
                    );
                if inputs.check_circular_dependencies {
                    list.push(
                        "check_circular_dependencies",
                        catalog::check_circular_dependencies(&inputs.root),
                    );
                }
            }
        }

        list
    }

    /// The complete ordered list: common fragments, then mode fragments.
    pub fn fragments(&self) -> Result<FragmentList> {
        let mut list = self.common_fragments()?;
        list.extend(self.mode_fragments());
        Ok(list)
    }

    /// Merge all fragments and stamp the mode.
    ///
    /// Overlapping scalars are logged as warnings, or rejected with
    /// [`crate::Error::ScalarConflict`] when the inputs ask for strict assembly.
    pub fn assemble(&self) -> Result<FinalConfig> {
        let mode = self.inputs.mode;
        let fragments = self.fragments()?;
        tracing::debug!(%mode, fragments = ?fragments.names(), "Assembling configuration");

        let conflicts = find_scalar_conflicts(&fragments)?;
        if self.inputs.strict {
            if let Some(conflict) = conflicts.into_iter().next() {
                return Err(conflict.into());
            }
        } else {
            for conflict in &conflicts {
                tracing::warn!(%conflict, "Fragment overwrites an earlier value");
            }
        }

        let count = fragments.len();
        let config = FinalConfig::stamp(mode, fragments.merge());
        tracing::info!(%mode, fragments = count, "Assembled configuration");
        Ok(config)
    }
}

/// Assemble the configuration described by `inputs`.
pub fn assemble(inputs: AssemblyInputs) -> Result<FinalConfig> {
    Assembler::new(inputs).assemble()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::RevisionSource;

    fn inputs(mode: BuildMode) -> AssemblyInputs {
        AssemblyInputs::new(mode, "/app").with_revision(RevisionSource::Fixed("v1".to_string()))
    }

    #[test]
    fn common_order_is_declared_order() {
        let names = Assembler::new(inputs(BuildMode::Production))
            .common_fragments()
            .unwrap()
            .names();

        assert_eq!(
            names,
            vec![
                "base",
                "entry",
                "define_platform",
                "site_page",
                "load_static_resources",
                "load_css",
                "load_typescript",
                "load_images",
                "load_svgr",
                "load_svg",
                "clean",
                "attach_revision",
            ]
        );
    }

    #[test]
    fn optional_javascript_rule_follows_typescript() {
        let mut with_js = inputs(BuildMode::Development);
        with_js.load_javascript = true;

        let names = Assembler::new(with_js).common_fragments().unwrap().names();
        let ts = names.iter().position(|n| *n == "load_typescript").unwrap();
        assert_eq!(names[ts + 1], "load_javascript");
    }

    #[test]
    fn development_mode_fragments() {
        let names = Assembler::new(inputs(BuildMode::Development))
            .mode_fragments()
            .names();
        assert_eq!(
            names,
            vec!["dev_client_entry", "dev_server", "split_chunks", "source_maps"]
        );
    }

    #[test]
    fn production_mode_fragments() {
        let names = Assembler::new(inputs(BuildMode::Production))
            .mode_fragments()
            .names();
        assert_eq!(names, vec!["split_chunks", "minify_javascript", "source_maps"]);
    }

    #[test]
    fn circular_check_is_production_only() {
        let mut dev = inputs(BuildMode::Development);
        dev.check_circular_dependencies = true;
        assert!(
            !Assembler::new(dev)
                .mode_fragments()
                .names()
                .contains(&"check_circular_dependencies")
        );

        let mut prod = inputs(BuildMode::Production);
        prod.check_circular_dependencies = true;
        assert_eq!(
            Assembler::new(prod).mode_fragments().names().last(),
            Some(&"check_circular_dependencies")
        );
    }

    #[test]
    fn default_assembly_has_no_scalar_conflicts() {
        for mode in BuildMode::ALL {
            let fragments = Assembler::new(inputs(mode)).fragments().unwrap();
            assert!(find_scalar_conflicts(&fragments).unwrap().is_empty());
        }
    }
}
