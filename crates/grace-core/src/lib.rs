//! Grace Core Domain Types
//!
//! This crate contains the domain model for the Grace chat backend:
//! conversation history and its normalization into provider messages,
//! the completion request/response model, and the provider seam.

pub mod chat;
pub mod completion;
pub mod error;
pub mod mock;
pub mod persona;
pub mod provider;

pub use chat::{
    normalize, text_from_value, ChatTurn, ConversationHistory, Message, MessageNormalizer, Role,
    OPENING_GREETING,
};
pub use completion::{CompletionRequest, CompletionResponse, ContentBlock, ResponseContent, Usage};
pub use error::CompletionError;
pub use mock::MockCompletionProvider;
pub use provider::CompletionProvider;
