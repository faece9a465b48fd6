//! Error types for bundlecfg-core

use std::path::PathBuf;

/// Result type for bundlecfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building fragments or assembling a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The build mode discriminator is not a recognized value
    #[error("Trying to use an unknown mode, {mode}")]
    InvalidMode { mode: String },

    /// Version-control metadata could not be read for the revision banner
    #[error("Revision unavailable for {path}: {source}")]
    RevisionUnavailable {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// No build mode was given by any configuration layer
    #[error("No build mode given; expected 'development' or 'production'")]
    MissingMode,

    /// A rule test pattern is not a valid regular expression
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A later fragment overwrites a value set by an earlier one (strict assembly only)
    #[error("Fragments '{earlier}' and '{later}' both set '{path}': {previous} is overwritten with {replacement}")]
    ScalarConflict {
        path: String,
        earlier: String,
        later: String,
        previous: serde_json::Value,
        replacement: serde_json::Value,
    },

    /// An explicitly requested settings file does not exist
    #[error("Settings file not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
