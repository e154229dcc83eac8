//! The seam between the chat service and a completion backend.

use async_trait::async_trait;

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::CompletionError;

/// A backend that turns a [`CompletionRequest`] into a [`CompletionResponse`].
///
/// Implementations make exactly one attempt per call; spacing between calls
/// is the caller's concern.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue a single completion call.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}
