//! Conversation entities: messages and the per-model chat log.

pub mod log;
pub mod message;
