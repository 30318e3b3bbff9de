//! Per-model conversation record.
//!
//! [`ChatLog`] keeps one ordered message sequence per model. It is owned
//! exclusively by the controller facade; a generation session only ever
//! appends to it, and only for the model it was created against.

use crate::chat::message::Message;
use crate::model::ModelId;
use std::collections::HashMap;

/// Ordered record of exchanged turns, keyed by model.
///
/// Insertion order is chronological. A model's sequence is created lazily on
/// first append and is never removed; `clear` empties it but keeps the key.
#[derive(Debug, Default)]
pub struct ChatLog {
    turns: HashMap<ModelId, Vec<Message>>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of a model's sequence, creating the
    /// sequence if absent. Always succeeds.
    pub fn append(&mut self, model: &ModelId, message: Message) {
        self.turns.entry(model.clone()).or_default().push(message);
    }

    /// Read a model's sequence without mutation.
    ///
    /// An unknown model yields an empty slice, not an error.
    pub fn read(&self, model: &ModelId) -> &[Message] {
        self.turns.get(model).map_or(&[], Vec::as_slice)
    }

    /// Empty a model's sequence. No-op if the model is unknown.
    pub fn clear(&mut self, model: &ModelId) {
        if let Some(turns) = self.turns.get_mut(model) {
            turns.clear();
        }
    }

    /// Number of turns recorded for a model.
    pub fn len(&self, model: &ModelId) -> usize {
        self.read(model).len()
    }

    pub fn is_empty(&self, model: &ModelId) -> bool {
        self.read(model).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> ModelId {
        ModelId::new(name)
    }

    #[test]
    fn append_creates_sequence_lazily() {
        let mut log = ChatLog::new();
        log.append(&model("m1"), Message::user("hello"));
        assert_eq!(log.read(&model("m1")).len(), 1);
        assert_eq!(log.read(&model("m1"))[0].content, "hello");
    }

    #[test]
    fn read_unknown_model_is_empty_not_error() {
        let log = ChatLog::new();
        assert!(log.read(&model("nope")).is_empty());
    }

    #[test]
    fn sequences_are_independent_per_model() {
        let mut log = ChatLog::new();
        log.append(&model("m1"), Message::user("a"));
        log.append(&model("m2"), Message::user("b"));
        assert_eq!(log.read(&model("m1")).len(), 1);
        assert_eq!(log.read(&model("m2")).len(), 1);
        assert_eq!(log.read(&model("m2"))[0].content, "b");
    }

    #[test]
    fn clear_empties_but_keeps_the_key() {
        let mut log = ChatLog::new();
        log.append(&model("m1"), Message::user("a"));
        log.clear(&model("m1"));
        assert!(log.read(&model("m1")).is_empty());
        log.append(&model("m1"), Message::user("again"));
        assert_eq!(log.read(&model("m1")).len(), 1);
    }

    #[test]
    fn clear_unknown_model_is_noop() {
        let mut log = ChatLog::new();
        log.clear(&model("ghost"));
        assert!(log.read(&model("ghost")).is_empty());
    }

    #[test]
    fn order_is_chronological() {
        let mut log = ChatLog::new();
        log.append(&model("m1"), Message::user("q"));
        log.append(&model("m1"), Message::assistant("a"));
        let turns = log.read(&model("m1"));
        assert_eq!(turns[0].content, "q");
        assert_eq!(turns[1].content, "a");
    }
}
