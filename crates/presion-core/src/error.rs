//! Error types for the numerical core.

use thiserror::Error;

/// Errors produced by the numerical core.
///
/// Every failure here is deterministic: the same inputs fail the same way,
/// so nothing is retried internally. Extrapolation beyond a measured
/// frequency range is deliberately *not* an error; see
/// [`crate::interpolate`].
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input data: mismatched lengths, empty arrays, odd-length
    /// packed vectors, or too few samples.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A numerical procedure had no valid result for the given data, e.g.
    /// a spectrum with no half-power crossing around its peak. The message
    /// carries the search bounds needed to diagnose the data.
    #[error("computation failed: {0}")]
    Computation(String),
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
