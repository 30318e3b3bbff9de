//! WebSocket adapter for the chat transport port.
//!
//! One WebSocket connection per generation session: the channel sends the
//! `{model, messages}` request as a single text frame, then receives
//! newline-free JSON frames until `{"done": true}` or an error. Frames that
//! do not parse are logged and skipped so one malformed payload cannot kill
//! a stream mid-generation.

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parley_application::{ChatChannel, ChatTransport, TransportError};
use parley_domain::{ChannelEvent, GenerateRequest};
use serde::Deserialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connects a fresh WebSocket for each generation session.
pub struct WsChatTransport {
    url: String,
}

impl WsChatTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl ChatTransport for WsChatTransport {
    async fn connect(&self) -> Result<Box<dyn ChatChannel>, TransportError> {
        debug!(url = %self.url, "opening chat channel");
        let (stream, _response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        let (sink, source) = stream.split();
        Ok(Box::new(WsChatChannel {
            sink,
            source,
            closed: false,
        }))
    }
}

struct WsChatChannel {
    sink: SplitSink<WsStream, WsMessage>,
    source: SplitStream<WsStream>,
    closed: bool,
}

#[async_trait]
impl ChatChannel for WsChatChannel {
    async fn send(&mut self, request: &GenerateRequest) -> Result<(), TransportError> {
        let payload =
            serde_json::to_string(request).map_err(|e| TransportError::Send(e.to_string()))?;
        self.sink
            .send(WsMessage::Text(payload))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    async fn recv(&mut self) -> Option<ChannelEvent> {
        loop {
            match self.source.next().await? {
                Ok(WsMessage::Text(text)) => match parse_inbound(&text) {
                    Some(event) => return Some(event),
                    None => {
                        warn!(payload = %text, "skipping malformed inbound frame");
                    }
                },
                Ok(WsMessage::Close(_)) => return None,
                // Control and binary frames carry no chat payload.
                Ok(_) => {}
                Err(e) => return Some(ChannelEvent::Error(e.to_string())),
            }
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.sink.close().await {
            debug!(error = %e, "chat channel close failed");
        }
    }
}

#[derive(Deserialize, Default)]
struct InboundPayload {
    chunk: Option<String>,
    done: Option<bool>,
    error: Option<String>,
}

/// Map one inbound JSON frame to a channel event.
///
/// `None` means the frame was malformed or empty and must be skipped
/// without disturbing the stream.
fn parse_inbound(text: &str) -> Option<ChannelEvent> {
    let payload: InboundPayload = serde_json::from_str(text).ok()?;
    if let Some(error) = payload.error {
        return Some(ChannelEvent::Error(error));
    }
    if payload.done == Some(true) {
        return Some(ChannelEvent::Done);
    }
    match payload.chunk {
        Some(chunk) if !chunk.is_empty() => Some(ChannelEvent::Chunk(chunk)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_frame_parses() {
        assert_eq!(
            parse_inbound(r#"{"chunk": "Hel"}"#),
            Some(ChannelEvent::Chunk("Hel".to_string()))
        );
    }

    #[test]
    fn done_frame_parses() {
        assert_eq!(parse_inbound(r#"{"done": true}"#), Some(ChannelEvent::Done));
        // done must be literally true
        assert_eq!(parse_inbound(r#"{"done": false}"#), None);
    }

    #[test]
    fn error_frame_parses() {
        assert_eq!(
            parse_inbound(r#"{"error": "model not found"}"#),
            Some(ChannelEvent::Error("model not found".to_string()))
        );
    }

    #[test]
    fn error_takes_precedence_over_other_fields() {
        assert_eq!(
            parse_inbound(r#"{"chunk": "x", "done": true, "error": "boom"}"#),
            Some(ChannelEvent::Error("boom".to_string()))
        );
    }

    #[test]
    fn empty_chunk_is_skipped() {
        assert_eq!(parse_inbound(r#"{"chunk": ""}"#), None);
    }

    #[test]
    fn malformed_frames_are_skipped() {
        assert_eq!(parse_inbound("not json"), None);
        assert_eq!(parse_inbound(r#"{"unrelated": 1}"#), None);
        assert_eq!(parse_inbound(r#"{"chunk": 42}"#), None);
    }
}
