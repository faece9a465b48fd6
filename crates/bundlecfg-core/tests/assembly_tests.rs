//! Tests for mode assembly

use std::path::{Path, PathBuf};

use bundlecfg_core::config::{BANNER_PLUGIN, DEFINE_PLUGIN, HTML_PLUGIN, SERVE_PLUGIN, TERSER_PLUGIN};
use bundlecfg_core::{
    Assembler, AssemblyInputs, BuildMode, Error, RevisionSource, Settings, assemble,
};
use bundlecfg_test_utils::git;
use bundlecfg_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

fn inputs(mode: BuildMode) -> AssemblyInputs {
    AssemblyInputs::new(mode, "/app").with_revision(RevisionSource::Fixed("v1.2.3".to_string()))
}

// =============================================================================
// Mode stamping
// =============================================================================

#[rstest]
#[case(BuildMode::Development, "development")]
#[case(BuildMode::Production, "production")]
fn assembled_config_carries_mode(#[case] mode: BuildMode, #[case] name: &str) {
    let config = assemble(inputs(mode)).unwrap();

    assert_eq!(config.mode(), mode);
    assert_eq!(config.to_json().unwrap()["mode"], json!(name));
}

#[rstest]
#[case("staging")]
#[case("Production")]
#[case("")]
fn unknown_mode_produces_no_config(#[case] name: &str) {
    let result = name
        .parse::<BuildMode>()
        .map(|mode| assemble(inputs(mode)));

    match result {
        Err(Error::InvalidMode { mode }) => assert_eq!(mode, name),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mode '{name}' should not assemble"),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn production_scenario() {
    let config = assemble(inputs(BuildMode::Production)).unwrap();

    assert_eq!(config.minimizers().len(), 1);
    assert!(config.minimizers()[0].is(TERSER_PLUGIN));
    assert_eq!(config.devtool.as_deref(), Some("source-map"));
    assert!(config.dev_server().is_none());
    assert_eq!(config.watch, None);
}

#[test]
fn development_scenario() {
    let config = assemble(inputs(BuildMode::Development)).unwrap();

    let serve = config.dev_server().expect("dev server plugin");
    assert_eq!(serve.option("liveReload"), Some(&json!(true)));
    assert_eq!(serve.option("port"), Some(&json!(5000)));
    assert_eq!(config.watch, Some(true));
    assert_eq!(config.devtool.as_deref(), Some("eval-source-map"));
    assert!(config.minimizers().is_empty());
}

#[test]
fn development_appends_dev_client_to_main_entry() {
    let dev = assemble(inputs(BuildMode::Development)).unwrap();
    assert_eq!(
        dev.entry["main"],
        vec!["./src/index.tsx", "webpack-plugin-serve/client"]
    );

    let prod = assemble(inputs(BuildMode::Production)).unwrap();
    assert_eq!(prod.entry["main"], vec!["./src/index.tsx"]);
}

#[rstest]
#[case(BuildMode::Development)]
#[case(BuildMode::Production)]
fn common_sections_present_in_every_mode(#[case] mode: BuildMode) {
    let config = assemble(inputs(mode)).unwrap();

    let output = config.output.as_ref().unwrap();
    assert_eq!(output.path, Some(PathBuf::from("/app/dist")));
    assert_eq!(output.filename.as_deref(), Some("[name]-bundle.js"));
    assert_eq!(output.clean, Some(true));

    assert_eq!(config.rules().len(), 5);
    assert!(config.plugin(HTML_PLUGIN).is_some());
    assert!(config.plugin(DEFINE_PLUGIN).is_some());
    assert_eq!(
        config.plugin(BANNER_PLUGIN).unwrap().option("banner"),
        Some(&json!("v1.2.3"))
    );

    let split = config.optimization.as_ref().unwrap().split_chunks.as_ref();
    assert!(split.unwrap().cache_groups.contains_key("commons"));
}

#[test]
fn rule_order_follows_declaration() {
    let config = assemble(inputs(BuildMode::Production)).unwrap();
    let tests: Vec<&str> = config.rules().iter().map(|r| r.test.as_str()).collect();

    assert_eq!(
        tests,
        vec![
            r"\.css$",
            r"\.tsx?$",
            r"\.(jpg|jpeg|png|gif|mp3)$",
            r"\.svg$",
            r"\.svg$",
        ]
    );
}

#[test]
fn svg_components_get_svgr_first() {
    let config = assemble(inputs(BuildMode::Development)).unwrap();
    let module = config.module.as_ref().unwrap();

    let rule = module
        .first_match(
            "/app/src/logo.svg",
            Some(Path::new("/app/src/components/Header.tsx")),
        )
        .unwrap()
        .unwrap();
    assert_eq!(rule.handlers, vec!["@svgr/webpack", "asset"]);
}

#[test]
fn typescript_under_node_modules_is_not_compiled() {
    let config = assemble(inputs(BuildMode::Development)).unwrap();
    let module = config.module.as_ref().unwrap();

    assert!(
        module
            .first_match("/app/src/node_modules/lib/index.ts", None)
            .unwrap()
            .is_none()
    );
    assert!(module.first_match("/app/src/index.tsx", None).unwrap().is_some());
}

#[test]
fn assembly_is_repeatable() {
    let first = assemble(inputs(BuildMode::Production)).unwrap();
    let second = assemble(inputs(BuildMode::Production)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_inputs_flow_into_fragments() {
    let mut custom = inputs(BuildMode::Development);
    custom.output_dir = "../public/build".to_string();
    custom.dev_server.port = 3000;
    custom.image_limit = 8192;

    let config = assemble(custom).unwrap();
    assert_eq!(
        config.output.as_ref().unwrap().path,
        Some(PathBuf::from("/public/build"))
    );
    assert_eq!(config.dev_server().unwrap().option("port"), Some(&json!(3000)));

    let images = config
        .rules()
        .iter()
        .find(|r| r.asset_type.is_some())
        .unwrap();
    assert_eq!(images.parser.as_ref().unwrap().data_url_condition.max_size, 8192);
}

// =============================================================================
// Failures and strict mode
// =============================================================================

#[test]
fn unavailable_revision_aborts_assembly() {
    let temp = TempDir::new().unwrap();
    git::empty_repo(temp.path());

    let inputs = AssemblyInputs::new(BuildMode::Production, temp.path());
    let err = assemble(inputs).unwrap_err();
    assert!(matches!(err, Error::RevisionUnavailable { .. }));
}

#[rstest]
#[case(BuildMode::Development)]
#[case(BuildMode::Production)]
fn strict_assembly_accepts_default_fragments(#[case] mode: BuildMode) {
    assert!(assemble(inputs(mode).strict(true)).is_ok());
}

#[test]
fn strict_assembly_rejects_scalar_overlap() {
    let assembler = Assembler::new(inputs(BuildMode::Production).strict(true));
    let mut fragments = assembler.fragments().unwrap();
    fragments.push(
        "late_source_maps",
        bundlecfg_core::catalog::generate_source_maps("eval-source-map"),
    );

    let conflicts = bundlecfg_core::find_scalar_conflicts(&fragments).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].path, "devtool");
    assert_eq!(conflicts[0].earlier, "source_maps");
    assert_eq!(conflicts[0].later, "late_source_maps");

    // Lenient merge keeps last-wins
    assert_eq!(fragments.merge().devtool.as_deref(), Some("eval-source-map"));
}

// =============================================================================
// Settings to assembly
// =============================================================================

#[test]
fn settings_file_drives_assembly() {
    let project = TestProject::new();
    project.write_settings(
        r#"
mode = "production"
revision = "release-7"

[page]
title = "Storefront"
description = "Shop"

[fragments]
check_circular_dependencies = true
"#,
    );

    let settings = Settings::discover(project.root()).unwrap();
    let mode = settings.resolve_mode(None).unwrap();
    let config = assemble(settings.into_inputs(mode, project.root())).unwrap();

    assert_eq!(config.mode(), BuildMode::Production);
    let html = config.plugin(HTML_PLUGIN).unwrap();
    assert_eq!(html.options["context"]["title"], "Storefront");
    assert_eq!(html.options["context"]["description"], "Shop");
    assert!(config.plugins.last().unwrap().is("CircularDependencyPlugin"));
}

#[test]
fn tagged_repository_revision_is_stamped() {
    let project = TestProject::new();
    project.init_git_with_tag("v4.0.0");

    let settings = Settings::discover(project.root()).unwrap();
    let config = assemble(settings.into_inputs(BuildMode::Development, project.root())).unwrap();

    assert_eq!(
        config.plugin(BANNER_PLUGIN).unwrap().option("banner"),
        Some(&json!("v4.0.0"))
    );
    assert!(config.plugin(SERVE_PLUGIN).is_some());
}
