//! Named, ordered fragment lists

use crate::config::PartialConfig;
use crate::merge::merge;

/// A fragment tagged with the catalog function that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedFragment {
    pub name: &'static str,
    pub config: PartialConfig,
}

/// Fragments in the order they will be merged.
///
/// The order is part of the assembly contract: rule and plugin lists are
/// concatenated in this order, and later scalars win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentList {
    fragments: Vec<NamedFragment>,
}

impl FragmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, config: PartialConfig) -> &mut Self {
        self.fragments.push(NamedFragment { name, config });
        self
    }

    /// Append every fragment of `other`, keeping its order.
    pub fn extend(&mut self, other: FragmentList) -> &mut Self {
        self.fragments.extend(other.fragments);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fragments.iter().map(|f| f.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedFragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fold the fragments left to right.
    pub fn merge(self) -> PartialConfig {
        merge(self.fragments.into_iter().map(|fragment| {
            tracing::trace!(fragment = fragment.name, "Merging fragment");
            fragment.config
        }))
    }
}
