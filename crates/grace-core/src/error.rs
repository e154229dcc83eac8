//! Completion errors.

use thiserror::Error;

/// Errors a completion provider can report.
///
/// The `Display` text of each variant is what a user eventually sees inside
/// the apology message, so it stays short and free of internal detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// Network-level failure (connection refused, DNS, TLS, ...).
    #[error("{0}")]
    Transport(String),

    /// The provider did not answer in time.
    #[error("Request timed out.")]
    Timeout,

    /// Provider rejected the credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Provider returned a non-success status.
    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    /// Provider answered with a body that could not be decoded.
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),
}

impl CompletionError {
    /// Short machine-readable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Transport(_) => "transport",
            CompletionError::Timeout => "timeout",
            CompletionError::Authentication(_) => "authentication",
            CompletionError::Api { .. } => "api",
            CompletionError::InvalidResponse(_) => "invalid_response",
        }
    }
}
