//! Result and Error types for gtools-alpha

/// Type alias for Result<T, alpha::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `gtools-alpha` crate
///
/// The pipeline has no recovery or partial-result mode; every failure from
/// the toolkit crates is fatal and carried up to the binary as-is.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("event data error")]
    Events(#[from] gtools_events::Error),

    #[error("histogram error")]
    Hist(#[from] gtools_hist::Error),

    #[error("fit error")]
    Fit(#[from] gtools_fit::Error),

    #[error("figure error")]
    Plot(#[from] gtools_plot::Error),

    #[error("a logger is already installed")]
    Logger(#[from] log::SetLoggerError),
}
