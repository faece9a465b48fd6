//! bundlecfg CLI
//!
//! Resolves the build mode and settings, assembles the configuration and
//! prints it for the bundler runtime to consume.

mod cli;
mod error;
mod logging;

use std::path::{Path, PathBuf};

use bundlecfg_core::{Assembler, Settings};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use cli::{Cli, Format};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(?cli, "Parsed arguments");

    let cwd = std::env::current_dir()?;
    let root = resolve_root(&cwd, cli.root.as_deref());

    let mut settings = match &cli.config {
        Some(path) => Settings::load(&cwd.join(path))?,
        None => Settings::discover(&root)?,
    };
    apply_overrides(&mut settings, &cli);

    let mode = settings.resolve_mode(cli.mode.as_deref())?;
    let assembler = Assembler::new(settings.into_inputs(mode, &root));

    let output = if cli.list_fragments {
        render(&assembler.fragments()?.names(), cli.format)?
    } else {
        render(&assembler.assemble()?, cli.format)?
    };
    println!("{output}");
    Ok(())
}

fn resolve_root(cwd: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    }
}

/// Command-line values take precedence over the settings file.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(port) = cli.port {
        settings.dev_server.port = port;
    }
    if let Some(output_dir) = &cli.output_dir {
        settings.output_dir = output_dir.clone();
    }
    if let Some(title) = &cli.title {
        settings.page.title = title.clone();
    }
    if let Some(description) = &cli.description {
        settings.page.description = description.clone();
    }
    if let Some(revision) = &cli.revision {
        settings.revision = Some(revision.clone());
    }
    if cli.strict {
        settings.strict = true;
    }
}

fn render<T: Serialize>(value: &T, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}
