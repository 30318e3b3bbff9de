//! Outbound generation request.

use crate::chat::message::Message;
use crate::model::ModelId;
use serde::Serialize;

/// The structured request sent once per session, immediately after the
/// channel becomes writable.
///
/// Carries the full ordered conversation for the model — every prior turn
/// plus the newly submitted user turn, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: ModelId,
    pub messages: Vec<Message>,
}

impl GenerateRequest {
    pub fn new(model: ModelId, messages: Vec<Message>) -> Self {
        Self { model, messages }
    }
}
