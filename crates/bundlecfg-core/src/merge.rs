//! Merge engine
//!
//! Folds an ordered sequence of [`PartialConfig`] values into one. The rules
//! are applied section by section, left fragment first:
//!
//! - Scalars: the later value replaces the earlier one (last-wins).
//! - Lists (`module.rules`, `plugins`, `optimization.minimizer`, entry module
//!   lists, resolve extensions): concatenated in order, never de-duplicated.
//! - Keyed maps and nested records: merged recursively with the same rules.
//! - A section left unset by a later fragment never erases an earlier one.
//!
//! Merging is associative, and for fragments touching disjoint sections it is
//! also commutative. It is order-sensitive wherever lists or scalar overwrites
//! are involved: two fragments that both set `devtool` silently resolve to the
//! later one. [`crate::assembly::find_scalar_conflicts`] reports such overlaps.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::config::PartialConfig;

/// A value that can absorb a later value of the same type.
pub trait Merge {
    /// Merge `other` into `self`, with `other` taking precedence for scalars.
    fn merge_from(&mut self, other: Self);
}

macro_rules! last_wins {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                fn merge_from(&mut self, other: Self) {
                    *self = other;
                }
            }
        )*
    };
}

last_wins!(String, bool, PathBuf);

impl<T: Merge> Merge for Option<T> {
    fn merge_from(&mut self, other: Self) {
        let Some(overlay) = other else {
            return;
        };
        if let Some(base) = self {
            base.merge_from(overlay);
        } else {
            *self = Some(overlay);
        }
    }
}

impl<T> Merge for Vec<T> {
    fn merge_from(&mut self, other: Self) {
        self.extend(other);
    }
}

impl<K: Ord, V: Merge> Merge for BTreeMap<K, V> {
    fn merge_from(&mut self, other: Self) {
        for (key, overlay) in other {
            match self.get_mut(&key) {
                Some(base) => base.merge_from(overlay),
                None => {
                    self.insert(key, overlay);
                }
            }
        }
    }
}

impl Merge for Map<String, Value> {
    fn merge_from(&mut self, other: Self) {
        for (key, overlay) in other {
            match self.get_mut(&key) {
                Some(base) => deep_merge_value(base, overlay),
                None => {
                    self.insert(key, overlay);
                }
            }
        }
    }
}

impl Merge for Value {
    fn merge_from(&mut self, other: Self) {
        deep_merge_value(self, other);
    }
}

/// Deep merge two JSON values.
///
/// Objects merge recursively, arrays concatenate, anything else is replaced
/// by `other`.
pub fn deep_merge_value(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            base_map.merge_from(other_map);
        }
        (Value::Array(base_items), Value::Array(other_items)) => {
            base_items.extend(other_items);
        }
        (base, other) => {
            *base = other;
        }
    }
}

/// Merge an ordered sequence of partial configurations into one.
///
/// An empty sequence yields an empty configuration.
pub fn merge<I>(fragments: I) -> PartialConfig
where
    I: IntoIterator<Item = PartialConfig>,
{
    fragments
        .into_iter()
        .fold(PartialConfig::default(), |mut merged, fragment| {
            merged.merge_from(fragment);
            merged
        })
}
