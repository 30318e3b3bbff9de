//! Chat transport port
//!
//! Defines the interface for the duplex streaming connection a generation
//! session talks over. The adapter (infrastructure layer) owns the physical
//! connection; the session owns exactly one channel for its lifetime and
//! releases it on entry to any terminal state.

use async_trait::async_trait;
use parley_domain::{ChannelEvent, GenerateRequest};
use thiserror::Error;

/// Errors that can occur on the chat transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Send error: {0}")]
    Send(String),

    #[error("Channel closed")]
    Closed,
}

/// Factory for chat channels against a fixed endpoint.
///
/// `connect` resolving means the channel is writable; sending a request
/// before that point is impossible by construction.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn ChatChannel>, TransportError>;
}

/// One open duplex channel for a single exchange.
///
/// Inbound events are delivered by `recv` in transmission order — the
/// adapter guarantees no reordering. Fragment boundaries carry no meaning
/// beyond "concatenation reproduces the full response text". Malformed
/// inbound payloads are the adapter's problem: it logs and skips them,
/// never surfacing them as events.
#[async_trait]
pub trait ChatChannel: Send {
    /// Transmit the request. Valid once, immediately after `connect`.
    async fn send(&mut self, request: &GenerateRequest) -> Result<(), TransportError>;

    /// Receive the next event. `None` means the channel closed without a
    /// terminal event (the session treats this as a channel error).
    async fn recv(&mut self) -> Option<ChannelEvent>;

    /// Terminate the channel. Idempotent; suppression of events already in
    /// flight is best-effort — absolute discrimination of stale events is
    /// the session's job, by identity.
    async fn close(&mut self);
}
