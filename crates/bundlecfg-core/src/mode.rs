//! Build mode discriminator
//!
//! The mode selects which fragment group the assembler appends after the
//! common fragments. It is a closed enum so every branch point is checked
//! exhaustively by the compiler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Build variant the configuration is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Live-reloading dev server, watch mode, eval source maps.
    Development,

    /// Minified output with full source maps.
    Production,
}

impl BuildMode {
    /// All modes, in declaration order.
    pub const ALL: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    /// The lowercase name the bundler runtime expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl FromStr for BuildMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
