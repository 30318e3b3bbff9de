//! Presentation layer for ollama-parley
//!
//! This crate contains CLI definitions, console rendering for streamed
//! responses, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::{ConsoleNotifier, ConsoleRenderer};
