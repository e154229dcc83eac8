//! HTTP client for the Messages API.

use std::time::Duration;

use async_trait::async_trait;
use grace_core::{CompletionError, CompletionProvider, CompletionRequest, CompletionResponse};
use reqwest::Client as ReqwestClient;
use tracing::{debug, error, instrument};

use crate::error::AnthropicError;
use crate::types::ApiErrorBody;

/// Public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Value sent in the `anthropic-version` header.
pub const API_VERSION: &str = "2023-06-01";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Options for building an [`AnthropicClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL, without the `/v1/messages` path.
    pub base_url: String,

    /// Whole-request timeout.
    pub timeout: Duration,

    /// `anthropic-version` header value.
    pub api_version: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_version: API_VERSION.to_string(),
        }
    }
}

/// Client for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
    api_version: String,
}

impl AnthropicClient {
    /// Create a client for the public endpoint with default options.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AnthropicError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with custom options.
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, AnthropicError> {
        let client = ReqwestClient::builder().timeout(options.timeout).build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_version: options.api_version,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request to `/v1/messages`.
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()), level = "debug")]
    pub async fn messages(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AnthropicError> {
        let url = format!("{}/v1/messages", self.base_url);

        debug!("Sending messages request");
        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let parsed: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
                error!(error = %e, "Failed to parse messages response");
                AnthropicError::InvalidResponse(e.to_string())
            })?;
            debug!(
                id = parsed.id.as_deref().unwrap_or_default(),
                stop_reason = parsed.stop_reason.as_deref().unwrap_or_default(),
                "Received messages response"
            );
            Ok(parsed)
        } else {
            let message = ApiErrorBody::parse(&body)
                .map(|body| body.error.message)
                .unwrap_or(body);
            error!(status = status.as_u16(), message = %message, "Messages API error");
            Err(AnthropicError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.messages(&request).await.map_err(CompletionError::from)
    }
}
