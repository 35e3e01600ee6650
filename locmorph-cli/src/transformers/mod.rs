//! Service-backed value transformers wired up by the CLI.

pub mod chat;

pub use chat::{ChatConfig, ChatRewriter};
