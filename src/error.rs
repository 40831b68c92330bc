//! Error Taxonomy
//!
//! Typed validation failures surfaced to callers. Numeric edge cases
//! (resultant length near 0 or 1, sigma-augmented denominators) are
//! absorbed by guard branches in the estimator and never raise.

/// Result type for coherence-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating a choice sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// One or more elements fall outside the active alphabet. The
    /// offending symbols are named in input order.
    #[error("invalid choices detected: {symbols}")]
    InvalidInput { symbols: String },

    /// The caller declared an expected length that the input does not have.
    #[error("incorrect number of choices: {actual}, expected: {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Zero-length input under [`EmptyPolicy::Reject`](crate::engine::EmptyPolicy::Reject).
    #[error("empty choice sequence")]
    EmptySequence,
}
