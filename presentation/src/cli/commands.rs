//! CLI command definitions

use clap::Parser;
use parley_domain::ModelSort;
use std::path::PathBuf;

/// CLI arguments for ollama-parley
#[derive(Parser, Debug)]
#[command(name = "ollama-parley")]
#[command(author, version, about = "Interactive streaming chat against local Ollama models")]
#[command(long_about = r#"
Ollama Parley is an interactive chat client for locally installed Ollama
models. Responses stream to the terminal as they are generated; press
Ctrl+C to stop a response mid-stream. Each model keeps its own
conversation history for the lifetime of the process.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./parley.toml       Project-level config
3. ~/.config/ollama-parley/config.toml   Global config

Example:
  ollama-parley
  ollama-parley -m llama3:8b
  ollama-parley --sort size_desc --ollama-url http://10.0.0.5:11434
"#)]
pub struct Cli {
    /// Model to chat with (defaults to the first listed model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sort order for the model listing
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<ModelSort>,

    /// WebSocket URL of the chat streaming endpoint
    #[arg(long, value_name = "URL")]
    pub chat_url: Option<String>,

    /// Base URL of the Ollama HTTP API
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
