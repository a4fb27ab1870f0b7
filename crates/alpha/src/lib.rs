//! Prompt decay-constant analysis pipeline for neutron event trees
//!
//! Ties the toolkit crates together into the single linear workflow of the
//! reference analysis: load an event tree, flatten a branch, histogram it
//! per-event, optionally fit an exponential decay over a fixed window, and
//! write the figure out.
//!
//! Every quantity is described by a [QuantityConfig], so near-identical
//! analyses (arrival time, generation count) are one function call each
//! instead of duplicated scripts.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use gtools_alpha::{run_quantity, QuantityConfig};
//! # use gtools_events::read_tree_spec;
//! let tree = read_tree_spec("usphere.json:tree").unwrap();
//!
//! let config = QuantityConfig {
//!     branch: "NeutronGlobalTime".to_string(),
//!     x_label: "Global Time [ns]".to_string(),
//!     y_label: "Neutron Number".to_string(),
//!     bins: 50,
//!     low: 0.0,
//!     high: 1250.0,
//!     window: Some((400.0, 1000.0)),
//!     log_scale: true,
//!     output_stem: "NeutronGlobalTime".into(),
//! };
//!
//! let fit = run_quantity(&tree, &config).unwrap().unwrap();
//! println!("k = {:.6} ({:.6})", fit.slope, fit.slope_err);
//! ```
//!
//! The `usphere-alpha` binary runs the two built-in quantities and tees all
//! output to a log file through [TeeLogger].

mod error;
mod logger;
mod pipeline;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use logger::TeeLogger;

#[doc(inline)]
pub use pipeline::{run_quantity, QuantityConfig};
