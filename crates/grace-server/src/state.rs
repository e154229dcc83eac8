//! Shared application state.

use std::sync::Arc;

use grace_core::CompletionProvider;

use crate::chat::ChatService;
use crate::config::Config;

/// Shared application state.
pub struct AppState {
    /// Throttled completion caller shared by every request.
    pub chat: ChatService,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(chat: ChatService) -> Arc<Self> {
        Arc::new(Self { chat })
    }

    /// Build the state from configuration and a provider.
    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &Config) -> Arc<Self> {
        Self::new(ChatService::from_config(provider, config))
    }
}
