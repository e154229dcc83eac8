//! # Mock Completion Provider for Testing
//!
//! Provides a `MockCompletionProvider` that implements the `CompletionProvider`
//! trait. It records every request it receives and answers with a preset
//! content or error, so callers can be tested without network access.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::completion::{CompletionRequest, CompletionResponse, ResponseContent};
use crate::error::CompletionError;
use crate::provider::CompletionProvider;

type Outcome = Result<ResponseContent, CompletionError>;

/// A mock completion provider for testing purposes.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionProvider {
    /// Preset outcome. `None` answers with empty text.
    outcome: Arc<Mutex<Option<Outcome>>>,
    /// Every request received, in call order.
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockCompletionProvider {
    /// Creates a new mock that answers with an empty text response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content that subsequent calls return.
    pub fn set_content(&self, content: ResponseContent) {
        *lock(&self.outcome) = Some(Ok(content));
    }

    /// Helper to set a plain string response.
    pub fn set_text_response(&self, text: &str) {
        self.set_content(ResponseContent::Text(text.to_string()));
    }

    /// Makes subsequent calls fail with `error`.
    pub fn set_error(&self, error: CompletionError) {
        *lock(&self.outcome) = Some(Err(error));
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        lock(&self.requests).push(request);

        let outcome = lock(&self.outcome).clone();
        match outcome {
            Some(Ok(content)) => Ok(CompletionResponse::from_content(content)),
            Some(Err(error)) => Err(error),
            None => Ok(CompletionResponse::from_content(ResponseContent::Text(
                String::new(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Message;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new("model", 400, "system", vec![Message::user(text)])
    }

    #[tokio::test]
    async fn test_records_requests_and_returns_preset() {
        let provider = MockCompletionProvider::new();
        provider.set_text_response("Peace be with you.");

        let response = provider.complete(request("Hello")).await.unwrap();
        assert_eq!(response.text(), "Peace be with you.");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requests()[0].messages, vec![Message::user("Hello")]);
    }

    #[tokio::test]
    async fn test_preset_error() {
        let provider = MockCompletionProvider::new();
        provider.set_error(CompletionError::Timeout);

        let result = provider.complete(request("Hello")).await;
        assert_eq!(result, Err(CompletionError::Timeout));
    }
}
