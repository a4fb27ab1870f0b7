//! Module for log-linear least-squares exponential fits
//!
//! Fits `count = exp(k*x + b)` to windowed histogram data by ordinary least
//! squares of `ln(count)` against `x`, the standard closed-form estimate for
//! an exponential decay constant. Alongside the slope and intercept the fit
//! reports the Pearson correlation of the log-space points and the standard
//! error of the slope.
//!
//! # Quickstart example
//!
//! ```rust
//! # use gtools_fit::fit_exponential;
//! let x = [412.5, 437.5, 462.5, 487.5];
//! let y: Vec<f64> = x.iter().map(|v| (-0.01 * v + 2.0_f64).exp()).collect();
//!
//! let fit = fit_exponential(&x, &y).unwrap();
//! assert!((fit.slope + 0.01).abs() < 1e-12);
//! ```
//!
//! Degenerate inputs are rejected with a descriptive [Error] rather than
//! propagated as NaN: a non-positive count has no logarithm, fewer than
//! three points leave the standard error undefined, and zero variance in
//! either coordinate breaks the correlation.

mod error;
mod expfit;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use expfit::{fit_exponential, ExpFit};
