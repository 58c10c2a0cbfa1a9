//! Error types raised while configuring the weighted scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a scorer configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorerConfigError {
    /// Dimension weights were negative, non-finite, or summed to zero.
    #[error("dimension weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,
    /// The soft gate penalty factor fell outside `0.0..=1.0`.
    #[error("soft gate penalty factor must be a finite value between 0.0 and 1.0")]
    InvalidPenaltyFactor,
    /// The gate policy name was not recognised.
    #[error("unknown eligibility gate '{value}' (expected 'hard' or 'soft')")]
    UnknownGate {
        /// Value supplied by the caller.
        value: String,
    },
}
