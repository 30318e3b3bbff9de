//! Generation session controller.
//!
//! [`ChatController`] is the single point through which the UI layer submits
//! a message, cancels a generation, or switches the active model. It owns
//! the chat log and at most one live [`GenerationSession`], and routes every
//! inbound channel event to that session only — discrimination is by session
//! identity, not a shared flag, so events still draining from a cancelled
//! session can never touch the log or a newer session's buffer.

pub mod session;

use crate::ports::notifier::NotificationSink;
use crate::ports::renderer::Renderer;
use crate::ports::transport::ChatTransport;
use parley_domain::{
    ChannelEvent, ChatLog, GenerateRequest, GenerationState, Message, ModelId, SessionId,
};
use session::{GenerationSession, spawn_pump};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Errors surfaced by the controller facade.
///
/// All of these are handled locally: they are reported through the
/// notification sink and leave every piece of state unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControllerError {
    #[error("No model selected")]
    NoModelSelected,

    #[error("Cannot switch model while a response is generating")]
    ModelSwitchDenied,

    #[error("A generation is already in progress")]
    GenerationInProgress,
}

/// Facade coordinating the chat log, the active model and the one live
/// generation session.
pub struct ChatController {
    log: ChatLog,
    active_model: Option<ModelId>,
    /// Holds live sessions only; terminal sessions are detached immediately.
    active: Option<GenerationSession>,
    transport: Arc<dyn ChatTransport>,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn NotificationSink>,
    events_tx: mpsc::UnboundedSender<(SessionId, ChannelEvent)>,
    events_rx: mpsc::UnboundedReceiver<(SessionId, ChannelEvent)>,
    stale_events_discarded: u64,
}

impl ChatController {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        renderer: Arc<dyn Renderer>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            log: ChatLog::new(),
            active_model: None,
            active: None,
            transport,
            renderer,
            notifier,
            events_tx,
            events_rx,
            stale_events_discarded: 0,
        }
    }

    /// The currently selected model, if any.
    pub fn active_model(&self) -> Option<&ModelId> {
        self.active_model.as_ref()
    }

    /// True while a session is `Awaiting` or `Streaming`.
    pub fn is_generating(&self) -> bool {
        self.active.is_some()
    }

    /// The conversation recorded for a model (empty for unknown models).
    pub fn history(&self, model: &ModelId) -> &[Message] {
        self.log.read(model)
    }

    /// Count of channel events dropped because their session was no longer
    /// the active one. Diagnostic only.
    pub fn stale_events_discarded(&self) -> u64 {
        self.stale_events_discarded
    }

    /// Select the model future submissions target.
    ///
    /// Denied while a generation is in flight; the model's log entry is left
    /// untouched (it is created lazily on first append).
    pub fn select_model(&mut self, model: ModelId) -> Result<(), ControllerError> {
        if self.active.is_some() {
            self.notifier
                .notify("Cannot switch model while a response is generating.");
            return Err(ControllerError::ModelSwitchDenied);
        }
        info!(model = %model, "model selected");
        self.active_model = Some(model);
        Ok(())
    }

    /// Submit a user message against the active model.
    ///
    /// Appends the user turn to the log, starts a fresh session with a new
    /// [`SessionId`] and drives it through `Awaiting`. Returns `Ok(None)`
    /// for text that is empty after trimming (a silent no-op). At most one
    /// session may be live: submitting during a generation is denied — the
    /// caller cancels first.
    pub fn submit(&mut self, text: &str) -> Result<Option<SessionId>, ControllerError> {
        let Some(model) = self.active_model.clone() else {
            self.notifier.notify("Select a model before sending a message.");
            return Err(ControllerError::NoModelSelected);
        };
        if self.active.is_some() {
            self.notifier
                .notify("A response is already in progress. Stop it first.");
            return Err(ControllerError::GenerationInProgress);
        }
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let message = Message::user(text);
        self.log.append(&model, message.clone());
        self.renderer.on_commit(&model, &message);

        let request = GenerateRequest::new(model.clone(), self.log.read(&model).to_vec());
        let session = GenerationSession::new(model);
        let sid = session.id();
        debug!(session = %sid, model = %session.model(), "starting generation");

        spawn_pump(
            Arc::clone(&self.transport),
            request,
            sid,
            session.cancel_token(),
            self.events_tx.clone(),
        );
        self.active = Some(session);
        Ok(Some(sid))
    }

    /// Cancel the live generation, if any. Returns whether one was cancelled.
    ///
    /// The session is detached immediately — a new submit may proceed without
    /// waiting for the channel close to physically complete. Its partial
    /// buffer is never committed; events still draining from its channel are
    /// discarded by identity in [`handle_event`](Self::handle_event).
    pub fn cancel(&mut self) -> bool {
        let Some(mut session) = self.active.take() else {
            return false;
        };
        session.abort();
        info!(session = %session.id(), "generation stopped by user");
        self.notifier.notify("Generation stopped.");
        true
    }

    /// Clear the active model's conversation, cancelling any live generation
    /// first.
    pub fn clear(&mut self) {
        self.cancel();
        if let Some(model) = self.active_model.clone() {
            self.log.clear(&model);
            info!(model = %model, "conversation cleared");
        }
    }

    /// Receive and dispatch the next channel event.
    ///
    /// Returns the session state after applying the event, or `None` when
    /// the event was stale (or the internal channel closed).
    pub async fn pump(&mut self) -> Option<GenerationState> {
        let (sid, event) = self.events_rx.recv().await?;
        self.handle_event(sid, event)
    }

    /// Apply one channel event to the live session.
    ///
    /// The identity check comes first: events whose session is not the
    /// currently owned one are discarded — they belong to a cancelled or
    /// superseded exchange whose channel had I/O already in flight.
    pub fn handle_event(
        &mut self,
        sid: SessionId,
        event: ChannelEvent,
    ) -> Option<GenerationState> {
        let Some(mut session) = self.active.take_if(|s| s.id() == sid) else {
            self.stale_events_discarded += 1;
            debug!(session = %sid, ?event, "discarding event for inactive session");
            return None;
        };

        match event {
            ChannelEvent::Ready => {
                session.begin_streaming();
            }
            ChannelEvent::Chunk(chunk) => {
                session.push_chunk(&chunk);
                self.renderer
                    .on_buffer_update(session.id(), session.model(), session.buffer());
            }
            ChannelEvent::Done => {
                if let Some(message) = session.complete() {
                    self.log.append(session.model(), message.clone());
                    self.renderer.on_commit(session.model(), &message);
                    info!(session = %session.id(), bytes = message.content.len(), "generation completed");
                }
            }
            ChannelEvent::Error(reason) => {
                session.fail();
                warn!(session = %session.id(), %reason, "generation failed");
                self.renderer
                    .on_generation_failed(session.id(), session.model(), &reason);
                self.notifier
                    .notify(&format!("Generation failed: {reason}"));
            }
        }

        let state = session.state();
        if state.is_live() {
            self.active = Some(session);
        }
        Some(state)
    }
}
