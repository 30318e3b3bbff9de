//! Infrastructure Layer
//!
//! Adapters binding the application ports to the outside world:
//! - WebSocket chat transport (the streaming generation channel)
//! - Ollama HTTP API client (model directory)
//! - Configuration file loading and merging

pub mod config;
pub mod ollama;
pub mod ws;

pub use config::{ConfigLoader, DisplayConfig, EndpointsConfig, FileConfig};
pub use ollama::OllamaModelDirectory;
pub use ws::WsChatTransport;
