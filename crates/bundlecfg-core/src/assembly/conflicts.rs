//! Scalar overlap detection
//!
//! Merging resolves overlapping scalars by letting the later fragment win.
//! That is deterministic but can hide authoring mistakes, such as two
//! fragments both picking a source-map kind. This pass reports every such
//! overlap without changing the merge result.
//!
//! A later fragment that changes the kind of a value (an object replaced by
//! a scalar, or a scalar by an object or list) also overwrites it, so those
//! are reported too. Objects merging into objects and lists concatenating
//! onto lists are not overwrites.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fragments::FragmentList;
use crate::error::{Error, Result};

/// A value set by two fragments where the later one replaces the earlier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarConflict {
    /// Dotted path of the overwritten key, e.g. `output.filename`.
    pub path: String,
    pub earlier: &'static str,
    pub later: &'static str,
    pub previous: Value,
    pub replacement: Value,
}

impl fmt::Display for ScalarConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' set to {} by '{}' is overwritten with {} by '{}'",
            self.path, self.previous, self.earlier, self.replacement, self.later
        )
    }
}

impl From<ScalarConflict> for Error {
    fn from(conflict: ScalarConflict) -> Self {
        Error::ScalarConflict {
            path: conflict.path,
            earlier: conflict.earlier.to_string(),
            later: conflict.later.to_string(),
            previous: conflict.previous,
            replacement: conflict.replacement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Object,
    List,
    Scalar,
}

impl NodeKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::List,
            _ => NodeKind::Scalar,
        }
    }
}

/// Whether merging `replacement` onto `previous` discards `previous`.
fn overwrites(previous: &Value, replacement: &Value) -> bool {
    match (NodeKind::of(previous), NodeKind::of(replacement)) {
        (NodeKind::Object, NodeKind::Object) | (NodeKind::List, NodeKind::List) => false,
        (NodeKind::Scalar, NodeKind::Scalar) => previous != replacement,
        _ => true,
    }
}

/// Find every value a later fragment overwrites with a different one.
///
/// Lists are not inspected element-wise since they concatenate. Setting the
/// same scalar twice is not reported.
pub fn find_scalar_conflicts(fragments: &FragmentList) -> Result<Vec<ScalarConflict>> {
    let mut owners: BTreeMap<String, (&'static str, Value)> = BTreeMap::new();
    let mut conflicts = Vec::new();

    for fragment in fragments.iter() {
        let mut nodes = Vec::new();
        collect_nodes(&serde_json::to_value(&fragment.config)?, "", &mut nodes);

        for (path, node) in nodes {
            if let Some((earlier, previous)) = owners.get(&path) {
                if overwrites(previous, &node) {
                    conflicts.push(ScalarConflict {
                        path: path.clone(),
                        earlier: *earlier,
                        later: fragment.name,
                        previous: previous.clone(),
                        replacement: node.clone(),
                    });
                }
                if NodeKind::of(previous) != NodeKind::of(&node) {
                    // The old subtree is gone from the merged result
                    let prefix = format!("{path}.");
                    owners.retain(|key, _| !key.starts_with(&prefix));
                }
            }
            owners.insert(path, (fragment.name, node));
        }
    }

    Ok(conflicts)
}

/// Collect every node below the root in pre-order, parents before children.
fn collect_nodes(value: &Value, path: &str, out: &mut Vec<(String, Value)>) {
    if !path.is_empty() {
        out.push((path.to_string(), value.clone()));
    }
    if let Value::Object(map) = value {
        for (key, child) in map {
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            collect_nodes(child, &child_path, out);
        }
    }
}
