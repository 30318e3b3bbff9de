//! Application layer for ollama-parley
//!
//! This crate contains the generation session controller and the port
//! definitions it drives. It depends only on the domain layer; adapters
//! (WebSocket transport, Ollama directory, console sinks) live in the
//! infrastructure and presentation layers.

pub mod controller;
pub mod ports;

// Re-export commonly used types
pub use controller::{ChatController, ControllerError, session::GenerationSession};
pub use ports::{
    directory::{DirectoryError, ModelDirectory},
    notifier::{NoNotifications, NotificationSink},
    renderer::{NoRenderer, Renderer},
    transport::{ChatChannel, ChatTransport, TransportError},
};
