//! Shared test fixtures for the bundlecfg workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] - git repositories for revision lookups
//! - [`project`] - [`TestProject`](project::TestProject) with an optional `bundlecfg.toml`

pub mod git;
pub mod project;
