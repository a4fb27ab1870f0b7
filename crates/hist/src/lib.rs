//! Module for equal-width normalised histograms and fit windows
//!
//! - [Histogram] - fixed number of equal-width bins over a half-open range,
//!   with counts normalised per primary event
//! - [FitWindow] - a contiguous bin-index range selected for curve fitting
//!
//! Counts are normalised by a caller-supplied event count rather than the
//! sample length. A flattened branch may hold many values per event, so the
//! normalised counts read as a per-event rate.
//!
//! # Quickstart example
//!
//! ```rust
//! # use gtools_hist::{FitWindow, Histogram};
//! // 50 bins over [0, 1250) ns, normalised to 1000 primary events
//! let sample = vec![12.5, 40.0, 310.2, 55.1, 700.0, 980.4];
//! let hist = Histogram::new(&sample, 50, 0.0, 1250.0, 1000).unwrap();
//!
//! // Select the bins between 400 ns and 1000 ns for fitting
//! let window = FitWindow::from_bounds(&hist, 400.0, 1000.0).unwrap();
//! assert_eq!(window.indices(), 16..40);
//! ```

mod error;
mod histogram;
mod window;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use histogram::Histogram;

#[doc(inline)]
pub use window::FitWindow;
