//! Error types for the Verdict harness.

use thiserror::Error;

/// Errors raised by harness utilities.
///
/// Reconciliation mismatches are not errors. They are reported through a
/// [`FailureReporter`](crate::failure::FailureReporter).
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A timestamp fixture did not match `yyyy-MM-dd HH:mm:ss`.
    #[error("malformed timestamp '{input}': {reason}")]
    MalformedTimestamp { input: String, reason: String },

    /// A configuration value could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No tokio runtime was available to act as the main context.
    #[error("no runtime available: {0}")]
    NoRuntime(String),
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
