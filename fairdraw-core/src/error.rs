//! Error types shared by every sampling operation.

use thiserror::Error;

/// Errors that can occur while sampling.
///
/// Every operation surfaces the first error it meets and stops. Nothing is
/// retried: an entropy failure is treated as fatal for the call that saw it.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A count, bound, length, range or alphabet was out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The weight vector had no strictly positive entry, or its sum overflowed.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// The secure random source could not supply bytes.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(#[from] std::io::Error),
}

/// A type alias for `Result<T, SampleError>`.
pub type SampleResult<T> = Result<T, SampleError>;

impl SampleError {
    /// Shorthand for [`SampleError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SampleError::InvalidArgument(msg.into())
    }

    /// Shorthand for [`SampleError::InvalidWeights`].
    pub fn invalid_weights(msg: impl Into<String>) -> Self {
        SampleError::InvalidWeights(msg.into())
    }

    /// Returns true if the error came from the entropy source.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, SampleError::EntropySourceFailure(_))
    }
}
