//! Renderer port
//!
//! The rendering collaborator is a pure sink: it receives the accumulated
//! buffer after every channel event and each committed turn. Presentation
//! derives from session state, never the reverse.

use parley_domain::{Message, ModelId, SessionId};

/// Sink for conversation output.
pub trait Renderer: Send + Sync {
    /// Called after every buffer mutation with the full accumulated text.
    fn on_buffer_update(&self, session: SessionId, model: &ModelId, buffer: &str);

    /// Called when a turn is committed to the chat log (the user turn at
    /// submit time, the assistant turn on completion).
    fn on_commit(&self, model: &ModelId, message: &Message);

    /// Called when a generation fails; replaces the in-progress buffer with
    /// an error placeholder.
    fn on_generation_failed(&self, session: SessionId, model: &ModelId, reason: &str);
}

/// No-op renderer for when output is not needed.
pub struct NoRenderer;

impl Renderer for NoRenderer {
    fn on_buffer_update(&self, _session: SessionId, _model: &ModelId, _buffer: &str) {}
    fn on_commit(&self, _model: &ModelId, _message: &Message) {}
    fn on_generation_failed(&self, _session: SessionId, _model: &ModelId, _reason: &str) {}
}
