//! Server configuration.

use std::time::Duration;

use grace_anthropic::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use grace_core::persona;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen host.
    pub host: String,

    /// HTTP listen port.
    pub port: u16,

    /// Completion model identifier.
    pub model: String,

    /// Output token cap per reply.
    pub max_tokens: u32,

    /// Minimum spacing between outbound completion calls.
    pub min_request_interval: Duration,

    /// Prepend the legacy "Hello" turn to conversations that lack one.
    pub opening_greeting: bool,

    /// Messages API base URL.
    pub anthropic_base_url: String,

    /// Timeout for a single completion call.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            model: persona::DEFAULT_MODEL.to_string(),
            max_tokens: persona::MAX_TOKENS,
            min_request_interval: persona::MIN_REQUEST_INTERVAL,
            opening_greeting: false,
            anthropic_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}
