//! Result and Error types for gtools-hist

/// Type alias for Result<T, hist::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `gtools-hist` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("histogram must have at least one bin")]
    NoBins,

    #[error("invalid histogram range [{low:?}, {high:?})")]
    InvalidRange { low: f64, high: f64 },

    #[error("event count must be non-zero for normalisation")]
    NoEvents,

    #[error("window bound {0:?} is not a finite non-negative value")]
    InvalidBound(f64),

    #[error("window [{lower:?}, {upper:?}) selects no bins")]
    EmptyWindow { lower: f64, upper: f64 },

    #[error("window end index {index:?} is outside the histogram ({bins:?} bins)")]
    WindowOutOfRange { index: usize, bins: usize },
}
