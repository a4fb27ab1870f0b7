//! Result and Error types for gtools-fit

/// Type alias for Result<T, fit::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `gtools-fit` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("input length mismatch (x {x:?}, y {y:?})")]
    LengthMismatch { x: usize, y: usize },

    #[error("at least 3 points are needed for a slope error, found {0:?}")]
    InsufficientPoints(usize),

    #[error("count {value:?} at point {index:?} has no logarithm")]
    NonPositiveCount { index: usize, value: f64 },

    #[error("zero variance in {0} leaves the correlation undefined")]
    ZeroVariance(&'static str),

    #[error("correlation is exactly zero, slope error undefined")]
    ZeroCorrelation,
}
