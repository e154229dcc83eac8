//! Anthropic Messages API client for Grace
//!
//! This crate provides [`AnthropicClient`], an HTTP client for the
//! `/v1/messages` endpoint that implements
//! [`grace_core::CompletionProvider`].
//!
//! # Example
//!
//! ```rust,no_run
//! use grace_anthropic::AnthropicClient;
//! use grace_core::{persona, CompletionProvider, CompletionRequest, Message};
//!
//! async fn ask() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnthropicClient::new("your-api-key")?;
//!
//!     let request = CompletionRequest::new(
//!         persona::DEFAULT_MODEL,
//!         persona::MAX_TOKENS,
//!         persona::SYSTEM_PROMPT,
//!         vec![Message::user("I could use some encouragement today.")],
//!     );
//!
//!     let response = client.complete(request).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{AnthropicClient, ClientOptions, API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::AnthropicError;
pub use types::{ApiErrorBody, ApiErrorDetail};
