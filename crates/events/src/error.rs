//! Result and Error types for gtools-events

/// Type alias for Result<T, events::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `gtools-events` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("malformed event data")]
    JsonError(#[from] serde_json::Error),

    #[error("tree \"{0}\" not found in data file")]
    TreeNotFound(String),

    #[error("branch \"{0}\" not found in tree")]
    BranchNotFound(String),

    #[error(
        "inconsistent event count in branch \"{branch}\" (expected {expected:?}, found {found:?})"
    )]
    UnexpectedEventCount {
        branch: String,
        expected: usize,
        found: usize,
    },

    #[error("expected a \"path:tree\" specifier, found \"{0}\"")]
    MalformedSpec(String),
}
