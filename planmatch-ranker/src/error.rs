//! Error types raised while configuring the ranking recommender.

use thiserror::Error;

/// Errors raised when a ranker configuration is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RankerConfigError {
    /// The exclusion floor is not finite or lies outside `0.0..100.0`.
    #[error("exclusion floor must be a finite score in 0.0..100.0 (got {value})")]
    InvalidExclusionFloor {
        /// Value supplied by the caller.
        value: f32,
    },
}
