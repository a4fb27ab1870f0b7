//! Result and Error types for gtools-plot

/// Type alias for Result<T, plot::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `gtools-plot` crate
///
/// Backend errors are generic over the drawing backend in `plotters`, so
/// they are carried here as their rendered message. Figure writing has no
/// retry or recovery path; any failure is fatal to the analysis.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("figure rendering failed: {0}")]
    Backend(String),
}
