//! Channel events for one generation exchange.
//!
//! [`ChannelEvent`] is the uniform event surface of the transport channel:
//! the session's pump emits `Ready` once the request has been transmitted,
//! and the channel itself yields `Chunk`/`Done`/`Error` in transmission
//! order, never reordered or coalesced.

/// An event on a generation session's channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The channel became writable and the request was transmitted.
    Ready,
    /// A non-empty incremental text fragment.
    Chunk(String),
    /// The remote side finished; no further events follow.
    Done,
    /// The channel failed; preempts `Done`, the channel is closed after this.
    Error(String),
}

impl ChannelEvent {
    /// Returns the text fragment if this is a chunk event.
    pub fn chunk(&self) -> Option<&str> {
        match self {
            ChannelEvent::Chunk(text) => Some(text),
            _ => None,
        }
    }

    /// True if this event ends the exchange.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChannelEvent::Done | ChannelEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_exposes_its_text() {
        let event = ChannelEvent::Chunk("hello".to_string());
        assert_eq!(event.chunk(), Some("hello"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn ready_is_not_terminal() {
        assert!(!ChannelEvent::Ready.is_terminal());
        assert_eq!(ChannelEvent::Ready.chunk(), None);
    }

    #[test]
    fn done_and_error_are_terminal() {
        assert!(ChannelEvent::Done.is_terminal());
        assert!(ChannelEvent::Error("boom".to_string()).is_terminal());
    }
}
