//! Throttled completion caller.

use std::sync::Arc;

use grace_core::{
    persona, CompletionError, CompletionProvider, CompletionRequest, ConversationHistory,
    MessageNormalizer,
};
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::throttle::RequestThrottle;

/// Produces Grace's reply to a message and its conversation history.
///
/// Every call goes through the throttle, is re-normalized from the full
/// history, and is sent with the fixed persona prompt.
pub struct ChatService {
    provider: Arc<dyn CompletionProvider>,
    throttle: RequestThrottle,
    normalizer: MessageNormalizer,
    model: String,
    max_tokens: u32,
    system_prompt: String,
}

impl ChatService {
    /// Create a service with the default model, token cap and persona.
    pub fn new(provider: Arc<dyn CompletionProvider>, throttle: RequestThrottle) -> Self {
        Self {
            provider,
            throttle,
            normalizer: MessageNormalizer::default(),
            model: persona::DEFAULT_MODEL.to_string(),
            max_tokens: persona::MAX_TOKENS,
            system_prompt: persona::SYSTEM_PROMPT.to_string(),
        }
    }

    /// Create a service configured from `config`.
    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &Config) -> Self {
        let service = Self::new(provider, RequestThrottle::new(config.min_request_interval))
            .with_model(config.model.clone())
            .with_max_tokens(config.max_tokens)
            .with_normalizer(MessageNormalizer::new().with_opening_greeting(config.opening_greeting));

        info!(
            model = %service.model,
            max_tokens = service.max_tokens,
            min_interval_ms = service.throttle.min_interval().as_millis() as u64,
            opening_greeting = service.normalizer.opening_greeting(),
            "Chat service configured"
        );
        service
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_normalizer(mut self, normalizer: MessageNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the provider for a reply to `message`.
    ///
    /// Provider failures come back as `Err`; turning them into user-facing
    /// text is left to the caller.
    #[instrument(skip_all, fields(history_turns = history.len()))]
    pub async fn reply(
        &self,
        message: &str,
        history: &ConversationHistory,
    ) -> Result<String, CompletionError> {
        self.throttle.acquire().await;

        let messages = self.normalizer.normalize(message, history);
        debug!(?messages, "Prepared messages");

        let request = CompletionRequest::new(
            &self.model,
            self.max_tokens,
            &self.system_prompt,
            messages,
        );

        debug!(model = %self.model, "Calling completion provider");
        let response = self.provider.complete(request).await.map_err(|e| {
            error!(kind = e.kind(), error = %e, "Completion call failed");
            e
        })?;
        debug!(
            stop_reason = response.stop_reason.as_deref().unwrap_or_default(),
            shape = response.content.shape(),
            "Received completion"
        );

        Ok(response.text())
    }
}
