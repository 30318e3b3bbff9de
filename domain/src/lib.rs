//! Domain layer for ollama-parley
//!
//! This crate contains the core conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat Log
//!
//! One ordered message history per model. Histories are created lazily on
//! first append and survive a `clear` (the key stays, the turns go).
//!
//! ## Generation
//!
//! A generation is one user-submitted request and its streamed response.
//! [`GenerationState`] is the explicit state machine for that exchange and
//! [`SessionId`] is the identity used to tell a live generation apart from
//! a stale one whose channel events are still draining.

pub mod chat;
pub mod generation;
pub mod model;

// Re-export commonly used types
pub use chat::{
    log::ChatLog,
    message::{Message, Role},
};
pub use generation::{
    event::ChannelEvent, request::GenerateRequest, session_id::SessionId, state::GenerationState,
};
pub use model::{ModelId, ModelInfo, ModelSort, ParseSortError, sort_models};
