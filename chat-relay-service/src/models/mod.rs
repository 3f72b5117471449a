//! Wire-format models for the chat relay.

pub mod chat;

pub use chat::{ChatRequest, ChatResponse, Role, Turn};
