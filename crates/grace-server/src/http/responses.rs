//! HTTP request and response types.

use grace_core::{text_from_value, CompletionError, ConversationHistory};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned when the request has no usable message.
pub const INVALID_MESSAGE: &str =
    "Sorry, I couldn't process that message. Please provide a valid message.";

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Current user message. Any JSON value; coerced to text.
    #[serde(default)]
    pub message: Value,

    /// Prior turns as `[user, assistant]` pairs, oldest first.
    #[serde(default)]
    pub history: ConversationHistory,
}

impl ChatRequest {
    /// The message as text, or `None` when it is missing or empty.
    pub fn message_text(&self) -> Option<String> {
        text_from_value(&self.message)
    }
}

/// Response body for the chat and intro endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// Response for a request without a usable message.
    pub fn invalid_message() -> Self {
        Self::new(INVALID_MESSAGE)
    }

    /// Turn a reply into a response body. Errors become an apology.
    pub fn from_reply(reply: Result<String, CompletionError>) -> Self {
        match reply {
            Ok(text) => Self::new(text),
            Err(err) => Self::new(apology(&err)),
        }
    }
}

/// User-facing text for a failed completion.
pub fn apology(err: &CompletionError) -> String {
    format!("I'm sorry, but I encountered an error: {err}. Please try again later.")
}
