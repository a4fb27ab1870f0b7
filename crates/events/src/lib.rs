//! Module for reading particle-transport event trees
//!
//! An event tree is the columnar output of a simulation run: a named table
//! of branches, where each branch holds one ragged sequence of numeric values
//! per primary event. A branch row may hold any number of values, including
//! none at all, because each primary produces a variable number of secondary
//! particle records.
//!
//! Trees are stored as a JSON document mapping tree name to branch data, and
//! are addressed with the same `path:tree` convention as the simulation
//! tooling that writes them.
//!
//! - [EventTree] - Primary data structure containing one loaded tree
//! - [Branch] - A single named column of ragged per-event values
//! - [FlatSample] - All values of a branch concatenated in event order
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use gtools_events::{read_tree, read_tree_spec};
//! // Read a named tree from a data file
//! let tree = read_tree("/path/to/usphere.json", "tree").unwrap();
//!
//! // Equivalent, using a combined specifier
//! let tree = read_tree_spec("/path/to/usphere.json:tree").unwrap();
//!
//! // Flatten a branch into a single ordered sample
//! let sample = tree.branch("NeutronGlobalTime").unwrap().flatten();
//! println!("{} values over {} events", sample.len(), tree.n_events());
//! ```
//!
//! Trees are immutable once loaded. The event count is validated across all
//! branches at load time, so any [EventTree] handed out is guaranteed to be
//! consistent.

mod error;
mod reader;
mod sample;
mod tree;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use reader::{read_tree, read_tree_spec};

#[doc(inline)]
pub use sample::FlatSample;

#[doc(inline)]
pub use tree::{Branch, EventTree};
