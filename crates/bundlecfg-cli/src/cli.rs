//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Assemble and print the bundler configuration for a build mode
#[derive(Parser, Debug)]
#[command(name = "bundlecfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build mode: development or production
    #[arg(short, long, env = "BUNDLECFG_MODE")]
    pub mode: Option<String>,

    /// Project root; relative directories resolve against it
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Settings file (defaults to bundlecfg.toml in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dev-server port
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Bundle output directory, relative to the root
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// HTML page title
    #[arg(long)]
    pub title: Option<String>,

    /// HTML page description
    #[arg(long)]
    pub description: Option<String>,

    /// Use this revision instead of describing the git HEAD
    #[arg(long)]
    pub revision: Option<String>,

    /// Fail when two fragments set the same value differently
    #[arg(long)]
    pub strict: bool,

    /// Print the ordered fragment names instead of the merged configuration
    #[arg(long)]
    pub list_fragments: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Serialization used for the printed configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_mode_and_overrides() {
        let cli = Cli::try_parse_from([
            "bundlecfg",
            "--mode",
            "production",
            "--port",
            "8080",
            "--format",
            "yaml",
            "--strict",
        ])
        .unwrap();

        assert_eq!(cli.mode.as_deref(), Some("production"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.format, Format::Yaml);
        assert!(cli.strict);
        assert!(!cli.list_fragments);
    }

    #[test]
    fn mode_is_free_text_until_resolved() {
        // Unknown modes are rejected by the core so the message names the value
        let cli = Cli::try_parse_from(["bundlecfg", "--mode", "staging"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("staging"));
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["bundlecfg", "--port", "http"]).is_err());
    }
}
