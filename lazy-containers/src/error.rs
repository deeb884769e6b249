//! Error types for lazy container resolution

use thiserror::Error;

/// Error type for resolving an element of a lazy container.
///
/// Failures surface immediately to the caller of `get`; laziness only delays
/// *when* an error can occur, not whether it is reported. A failed resolution
/// stores nothing, so the index or key stays unresolved and a later `get`
/// re-attempts it.
#[derive(Debug, Error)]
pub enum Error {
    /// The index is beyond the explicit prefix and not covered by any
    /// extension rule
    #[error("index {0} is not covered by any prefix value or extension rule")]
    IndexUndefined(usize),
    /// A shifted view resolved to a negative source index
    #[error("invalid sequence index {0}")]
    InvalidIndex(i64),
    /// Resolution reached the depth limit without finding a cached base case
    #[error("resolution exceeded the recursion limit of {0}")]
    RecursionExceeded(usize),
    /// A user-supplied recurrence failed while computing a value
    #[error("recurrence failed: {0}")]
    Recurrence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a failure raised by a user-supplied recurrence function.
    pub fn recurrence(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Recurrence(err.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
