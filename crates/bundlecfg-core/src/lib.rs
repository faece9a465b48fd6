//! Bundler configuration assembly
//!
//! This crate builds the configuration object handed to a web application
//! bundler from small, independently testable fragments:
//!
//! - **Fragment catalog** ([`catalog`]): one function per concern, each
//!   returning a [`PartialConfig`] that touches only its own sections
//! - **Merge engine** ([`merge`]): folds an ordered list of partial
//!   configurations; lists concatenate, records merge, scalars last-wins
//! - **Mode assembler** ([`assembly`]): common fragments, then the fragments
//!   for the [`BuildMode`], merged and stamped into a [`FinalConfig`]
//! - **Settings** ([`settings`]): `bundlecfg.toml` project defaults resolved
//!   into [`AssemblyInputs`]
//!
//! # Architecture
//!
//! ```text
//!   Settings ──> AssemblyInputs ──> Assembler
//!                                       │
//!                       ┌───────────────┴───────────────┐
//!                 common fragments              mode fragments
//!                       └───────────────┬───────────────┘
//!                                  merge engine
//!                                       │
//!                                  FinalConfig
//! ```

pub mod assembly;
pub mod catalog;
pub mod config;
pub mod error;
pub mod merge;
pub mod mode;
pub mod revision;
pub mod settings;

pub use assembly::{
    Assembler, AssemblyInputs, FragmentList, NamedFragment, ScalarConflict, assemble,
    find_scalar_conflicts,
};
pub use config::{FinalConfig, PartialConfig, PluginDescriptor, Rule};
pub use error::{Error, Result};
pub use merge::{Merge, deep_merge_value, merge};
pub use mode::BuildMode;
pub use revision::RevisionSource;
pub use settings::{SETTINGS_FILE, Settings};
