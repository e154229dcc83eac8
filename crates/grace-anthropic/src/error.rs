//! Error types for the Anthropic client.

use grace_core::CompletionError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the Messages API.
#[derive(Debug, Error)]
pub enum AnthropicError {
    /// HTTP client error (connection, TLS, timeout, client construction).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Success response whose body could not be decoded.
    #[error("Unexpected response format: {0}")]
    InvalidResponse(String),
}

impl From<AnthropicError> for CompletionError {
    fn from(err: AnthropicError) -> Self {
        match err {
            AnthropicError::Http(e) if e.is_timeout() => CompletionError::Timeout,
            AnthropicError::Http(e) => CompletionError::Transport(e.to_string()),
            AnthropicError::Api { status, message }
                if status == StatusCode::UNAUTHORIZED.as_u16() =>
            {
                CompletionError::Authentication(message)
            }
            AnthropicError::Api { status, message } => CompletionError::Api { status, message },
            AnthropicError::InvalidResponse(message) => CompletionError::InvalidResponse(message),
        }
    }
}
