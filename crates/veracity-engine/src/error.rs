//! Error types for the verification engine

use thiserror::Error;

/// Errors surfaced by the verification and history paths.
///
/// Persistence failures are deliberately absent: the write is
/// best-effort and never fails the operation it belongs to.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The submission carried no content, or a required identifier
    /// was missing. Never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The inference service was unreachable or returned an error.
    /// Never retried, never downgraded to a default verdict.
    #[error("Inference service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Unexpected failure inside the pipeline
    #[error("Internal error: {0}")]
    Internal(String),
}
