//! Grace Server Library
//!
//! HTTP backend that forwards chat messages and their history to a
//! completion provider under a process-wide request throttle.

pub mod chat;
pub mod config;
pub mod http;
pub mod state;
pub mod throttle;

pub use chat::ChatService;
pub use config::Config;
pub use state::AppState;
pub use throttle::RequestThrottle;
