//! Ollama HTTP API client

mod directory;

pub use directory::OllamaModelDirectory;
