use crate::error::{Error, Result};
use crate::sample::FlatSample;

use std::collections::BTreeMap;

/// An immutable collection of events read from one tree
///
/// Every branch holds one ragged row of values per primary event. The outer
/// length of every branch is checked on construction, so the event count is
/// a property of the tree rather than of any single branch.
///
/// Trees are read-only once built. There are no mutating operations; an
/// analysis loads a tree once and discards it at the end of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTree {
    name: String,
    n_events: usize,
    branches: BTreeMap<String, Branch>,
}

impl EventTree {
    /// Build a tree from a set of branches, validating the event count
    ///
    /// Fails with [Error::UnexpectedEventCount] if any two branches disagree
    /// on the number of events. An empty branch set is a valid tree of zero
    /// events.
    pub fn new<S: Into<String>>(name: S, branches: Vec<Branch>) -> Result<Self> {
        let mut n_events = None;
        for branch in &branches {
            let found = branch.n_events();
            match n_events {
                None => n_events = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::UnexpectedEventCount {
                        branch: branch.name().to_string(),
                        expected,
                        found,
                    })
                }
                Some(_) => (),
            }
        }

        Ok(Self {
            name: name.into(),
            n_events: n_events.unwrap_or(0),
            branches: branches
                .into_iter()
                .map(|b| (b.name().to_string(), b))
                .collect(),
        })
    }

    /// Name of the tree within the data file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of primary events recorded in the tree
    pub fn n_events(&self) -> usize {
        self.n_events
    }

    /// Try to find a branch by name
    pub fn branch(&self, name: &str) -> Result<&Branch> {
        self.branches
            .get(name)
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))
    }

    /// Sorted list of the branch names available
    pub fn branch_names(&self) -> Vec<&str> {
        self.branches.keys().map(|k| k.as_str()).collect()
    }
}

/// A single named column of ragged per-event values
///
/// Each entry corresponds to one primary event and holds the values recorded
/// for every secondary particle of that event. Entries may be empty, and
/// their lengths vary from event to event.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    name: String,
    entries: Vec<Vec<f64>>,
}

impl Branch {
    /// Build a branch from raw per-event rows
    pub fn new<S: Into<String>>(name: S, entries: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Name of the branch within the tree
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of events, i.e. the outer length
    pub fn n_events(&self) -> usize {
        self.entries.len()
    }

    /// Total number of values over all events
    pub fn n_values(&self) -> usize {
        self.entries.iter().map(|e| e.len()).sum()
    }

    /// Raw per-event rows
    pub fn entries(&self) -> &[Vec<f64>] {
        &self.entries
    }

    /// Concatenate all per-event rows into one flat ordered sample
    ///
    /// Values keep their per-event grouping order, which carries no physical
    /// meaning beyond that. The result length always equals
    /// [n_values()](Branch::n_values).
    pub fn flatten(&self) -> FlatSample {
        FlatSample::new(self.entries.iter().flatten().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> Branch {
        Branch::new(
            "NeutronGlobalTime",
            vec![vec![12.5, 40.0, 310.2], vec![], vec![55.1]],
        )
    }

    #[test]
    fn flatten_keeps_event_order() {
        let sample = ragged().flatten();
        assert_eq!(sample.values(), &[12.5, 40.0, 310.2, 55.1]);
    }

    #[test]
    fn flatten_length_is_sum_of_rows() {
        let branch = ragged();
        assert_eq!(branch.flatten().len(), branch.n_values());
    }

    #[test]
    fn tree_rejects_mismatched_branches() {
        let result = EventTree::new(
            "tree",
            vec![
                Branch::new("a", vec![vec![1.0], vec![2.0]]),
                Branch::new("b", vec![vec![1.0]]),
            ],
        );
        assert!(matches!(
            result,
            Err(Error::UnexpectedEventCount {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_tree_has_zero_events() {
        let tree = EventTree::new("tree", Vec::new()).unwrap();
        assert_eq!(tree.n_events(), 0);
    }
}
