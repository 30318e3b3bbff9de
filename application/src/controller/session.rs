//! Generation session entity and its channel pump.
//!
//! A [`GenerationSession`] is the unit of one exchange: identity, target
//! model, explicit state, and the append-only response buffer. The channel
//! itself is owned exclusively by a background pump task spawned at submit
//! time; the pump tags every inbound event with the session's [`SessionId`]
//! so the controller can discard events from sessions it no longer owns.

use crate::ports::transport::ChatTransport;
use parley_domain::{ChannelEvent, GenerateRequest, GenerationState, Message, ModelId, SessionId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// One request/response exchange against a model.
#[derive(Debug)]
pub struct GenerationSession {
    id: SessionId,
    model: ModelId,
    state: GenerationState,
    buffer: String,
    cancel: CancellationToken,
}

impl GenerationSession {
    pub(crate) fn new(model: ModelId) -> Self {
        Self {
            id: SessionId::next(),
            model,
            state: GenerationState::Awaiting,
            buffer: String::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// The accumulated response text so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub(crate) fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// `Awaiting → Streaming` once the request is on the wire.
    pub(crate) fn begin_streaming(&mut self) {
        match self.state {
            GenerationState::Awaiting => self.state = GenerationState::Streaming,
            other => debug!(session = %self.id, state = %other, "ignoring ready in non-awaiting state"),
        }
    }

    /// Append a fragment. Legal only while live.
    pub(crate) fn push_chunk(&mut self, chunk: &str) {
        if self.state.is_live() {
            self.buffer.push_str(chunk);
        } else {
            warn!(session = %self.id, state = %self.state, "dropping chunk for terminal session");
        }
    }

    /// `→ Completed`; yields the assistant turn to commit. Returns `None`
    /// if the session is already terminal.
    pub(crate) fn complete(&mut self) -> Option<Message> {
        if !self.state.is_live() {
            return None;
        }
        self.state = GenerationState::Completed;
        Some(Message::assistant(self.buffer.clone()))
    }

    /// `→ Failed`; releases the channel. The buffer is not committed.
    pub(crate) fn fail(&mut self) {
        if self.state.is_live() {
            self.state = GenerationState::Failed;
            self.cancel.cancel();
        }
    }

    /// `→ Aborted`; releases the channel. The buffer is not committed.
    pub(crate) fn abort(&mut self) {
        if self.state.is_live() {
            self.state = GenerationState::Aborted;
            self.cancel.cancel();
        }
    }
}

/// Spawn the pump task for one session.
///
/// The pump is the only owner of the channel: it connects, transmits the
/// request, emits `Ready`, then forwards inbound events tagged with the
/// session ID until a terminal event arrives or the cancellation token
/// fires. The channel is closed on every exit path, so entering a terminal
/// state always releases it.
pub(crate) fn spawn_pump(
    transport: Arc<dyn ChatTransport>,
    request: GenerateRequest,
    sid: SessionId,
    cancel: CancellationToken,
    events: mpsc::UnboundedSender<(SessionId, ChannelEvent)>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut channel = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(session = %sid, "cancelled before the channel opened");
                return;
            }
            connected = transport.connect() => match connected {
                Ok(channel) => channel,
                Err(e) => {
                    let _ = events.send((sid, ChannelEvent::Error(e.to_string())));
                    return;
                }
            }
        };

        if let Err(e) = channel.send(&request).await {
            let _ = events.send((sid, ChannelEvent::Error(e.to_string())));
            channel.close().await;
            return;
        }
        let _ = events.send((sid, ChannelEvent::Ready));

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(session = %sid, "pump cancelled, closing channel");
                    channel.close().await;
                    return;
                }
                inbound = channel.recv() => match inbound {
                    Some(event) => {
                        let terminal = event.is_terminal();
                        let _ = events.send((sid, event));
                        if terminal {
                            channel.close().await;
                            return;
                        }
                    }
                    None => {
                        let _ = events.send((
                            sid,
                            ChannelEvent::Error("channel closed before completion".to_string()),
                        ));
                        return;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GenerationSession {
        GenerationSession::new(ModelId::new("m1"))
    }

    #[test]
    fn new_session_awaits_with_empty_buffer() {
        let s = session();
        assert_eq!(s.state(), GenerationState::Awaiting);
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn ready_then_chunks_accumulate() {
        let mut s = session();
        s.begin_streaming();
        assert_eq!(s.state(), GenerationState::Streaming);
        s.push_chunk("Hi");
        s.push_chunk(" there");
        assert_eq!(s.buffer(), "Hi there");
    }

    #[test]
    fn complete_yields_assistant_turn_once() {
        let mut s = session();
        s.begin_streaming();
        s.push_chunk("4");
        let message = s.complete().unwrap();
        assert_eq!(message, Message::assistant("4"));
        assert_eq!(s.state(), GenerationState::Completed);
        // Terminal: no second completion, no further transitions.
        assert!(s.complete().is_none());
        s.fail();
        assert_eq!(s.state(), GenerationState::Completed);
    }

    #[test]
    fn abort_is_terminal_and_discards_chunks() {
        let mut s = session();
        s.begin_streaming();
        s.push_chunk("Once");
        s.abort();
        assert_eq!(s.state(), GenerationState::Aborted);
        assert!(s.cancel_token().is_cancelled());
        s.push_chunk("upon a time");
        assert_eq!(s.buffer(), "Once");
    }

    #[test]
    fn fail_cancels_the_channel_token() {
        let mut s = session();
        s.fail();
        assert_eq!(s.state(), GenerationState::Failed);
        assert!(s.cancel_token().is_cancelled());
    }
}
