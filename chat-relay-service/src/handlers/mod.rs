pub mod chat;

pub use chat::{chat_handler, chat_preflight};
