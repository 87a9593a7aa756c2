use thiserror::Error;

/// Result type used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The input lies outside the operation's domain (zero divisor,
    /// negative exponent, negative factorial or fibonacci index).
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl MathError {
    /// Build an [`MathError::InvalidArgument`] and record the rejection.
    pub(crate) fn invalid(op: &'static str, reason: &'static str, input: impl std::fmt::Debug) -> Self {
        tracing::debug!(op, ?input, reason, "rejected input");
        Self::InvalidArgument(reason)
    }

    /// The fixed reason string carried by the error.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidArgument(reason) => reason,
        }
    }
}
