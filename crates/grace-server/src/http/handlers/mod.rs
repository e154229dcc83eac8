//! HTTP request handlers.

mod chat;
mod health;

pub use chat::{chat, intro};
pub use health::{health_check, home};
