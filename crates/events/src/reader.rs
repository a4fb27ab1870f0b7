//! Readers for the JSON event-tree format
//!
//! A data file maps tree names to tree data, and each tree maps branch names
//! to an array of per-event arrays:
//!
//! ```json
//! {
//!     "tree": {
//!         "branches": {
//!             "NeutronGlobalTime": [[12.5, 40.0], [], [55.1]],
//!             "NeutronGeneration": [[1.0, 2.0], [], [1.0]]
//!         }
//!     }
//! }
//! ```
//!
//! The whole document is deserialised in one pass. These files are event
//! samples rather than bulk tallies, so there is no need for a streaming
//! reader here.

use crate::error::{Error, Result};
use crate::tree::{Branch, EventTree};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

/// On-disk form of a single tree, before validation
#[derive(Deserialize, Debug)]
struct RawTree {
    branches: BTreeMap<String, Vec<Vec<f64>>>,
}

/// Read a named tree from a JSON event data file
///
/// Fails if the file is missing or malformed, or if the tree is not present.
/// All branches of the returned [EventTree] are guaranteed to agree on the
/// event count.
///
/// ```rust, no_run
/// # use gtools_events::read_tree;
/// let tree = read_tree("/path/to/usphere.json", "tree").unwrap();
/// ```
pub fn read_tree<P: AsRef<Path>>(path: P, name: &str) -> Result<EventTree> {
    let path = path.as_ref();
    debug!("Reading tree \"{}\" from {}", name, path.display());

    let reader = BufReader::new(File::open(path)?);
    let mut document: BTreeMap<String, RawTree> = serde_json::from_reader(reader)?;

    let raw = document
        .remove(name)
        .ok_or_else(|| Error::TreeNotFound(name.to_string()))?;

    let branches = raw
        .branches
        .into_iter()
        .map(|(branch, entries)| Branch::new(branch, entries))
        .collect();

    let tree = EventTree::new(name, branches)?;
    debug!(
        "Loaded {} events over {} branches",
        tree.n_events(),
        tree.branch_names().len()
    );
    Ok(tree)
}

/// Read a tree addressed by a combined `path:tree` specifier
///
/// This mirrors the addressing convention of the simulation tooling, e.g.
/// `USphere.json:tree`. The split is on the last `:` so paths containing
/// colons still resolve.
///
/// ```rust, no_run
/// # use gtools_events::read_tree_spec;
/// let tree = read_tree_spec("/path/to/usphere.json:tree").unwrap();
/// ```
pub fn read_tree_spec(spec: &str) -> Result<EventTree> {
    let (path, name) = split_spec(spec)?;
    read_tree(path, name)
}

/// Split a `path:tree` specifier on the last colon
fn split_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.rsplit_once(':') {
        Some((path, name)) if !path.is_empty() && !name.is_empty() => Ok((path, name)),
        _ => Err(Error::MalformedSpec(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple_spec() {
        assert_eq!(split_spec("usphere.json:tree").unwrap(), ("usphere.json", "tree"));
    }

    #[test]
    fn split_takes_last_colon() {
        assert_eq!(
            split_spec("run:2/usphere.json:tree").unwrap(),
            ("run:2/usphere.json", "tree")
        );
    }

    #[test]
    fn split_rejects_missing_parts() {
        assert!(split_spec("usphere.json").is_err());
        assert!(split_spec("usphere.json:").is_err());
        assert!(split_spec(":tree").is_err());
    }
}
