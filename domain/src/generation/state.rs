//! Generation session state machine.

/// State of one generation session.
///
/// `Awaiting → Streaming → {Completed | Aborted | Failed}`. Terminal states
/// are final: no transition is legal out of them, and the response buffer
/// may only be mutated while the session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Channel opening; the request has not been acknowledged yet.
    Awaiting,
    /// Request sent; chunks may arrive.
    Streaming,
    /// The full response was received and committed.
    Completed,
    /// Cancelled by the user; nothing committed.
    Aborted,
    /// The channel failed; nothing committed.
    Failed,
}

impl GenerationState {
    /// True for `Awaiting` or `Streaming` — the session still owns its channel.
    pub fn is_live(&self) -> bool {
        matches!(self, GenerationState::Awaiting | GenerationState::Streaming)
    }

    /// True for `Completed`, `Aborted` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        !self.is_live()
    }
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GenerationState::Awaiting => "awaiting",
            GenerationState::Streaming => "streaming",
            GenerationState::Completed => "completed",
            GenerationState::Aborted => "aborted",
            GenerationState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_states() {
        assert!(GenerationState::Awaiting.is_live());
        assert!(GenerationState::Streaming.is_live());
        assert!(!GenerationState::Completed.is_live());
    }

    #[test]
    fn terminal_states() {
        assert!(GenerationState::Completed.is_terminal());
        assert!(GenerationState::Aborted.is_terminal());
        assert!(GenerationState::Failed.is_terminal());
        assert!(!GenerationState::Streaming.is_terminal());
    }
}
