//! `gtools` is a semi-modular toolkit of small libraries for analysing
//! particle-transport event data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use gtools_utils as utils;

#[cfg(feature = "alpha")]
#[cfg_attr(docsrs, doc(cfg(feature = "alpha")))]
#[doc(inline)]
pub use gtools_alpha as alpha;

#[cfg(feature = "events")]
#[cfg_attr(docsrs, doc(cfg(feature = "events")))]
#[doc(inline)]
pub use gtools_events as events;

#[cfg(feature = "fit")]
#[cfg_attr(docsrs, doc(cfg(feature = "fit")))]
#[doc(inline)]
pub use gtools_fit as fit;

#[cfg(feature = "hist")]
#[cfg_attr(docsrs, doc(cfg(feature = "hist")))]
#[doc(inline)]
pub use gtools_hist as hist;

#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
#[doc(inline)]
pub use gtools_plot as plot;
