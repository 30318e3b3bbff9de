//! CLI entrypoint for Ollama Parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use parley_application::ChatController;
use parley_domain::ModelId;
use parley_infrastructure::{ConfigLoader, OllamaModelDirectory, WsChatTransport};
use parley_presentation::{ChatRepl, Cli, ConsoleNotifier, ConsoleRenderer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config, then let CLI flags override it
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };
    if let Some(url) = cli.chat_url {
        config.endpoints.chat_url = url;
    }
    if let Some(url) = cli.ollama_url {
        config.endpoints.ollama_url = url;
    }
    if let Some(sort) = cli.sort {
        config.display.sort = sort;
    }

    info!(
        chat_url = %config.endpoints.chat_url,
        ollama_url = %config.endpoints.ollama_url,
        "starting ollama-parley"
    );

    // === Dependency Injection ===
    let transport = Arc::new(WsChatTransport::new(config.endpoints.chat_url.clone()));
    let directory = Arc::new(OllamaModelDirectory::new(
        config.endpoints.ollama_url.clone(),
    ));
    let renderer = Arc::new(ConsoleRenderer::new());
    let notifier = Arc::new(ConsoleNotifier::new());

    let mut controller = ChatController::new(transport, renderer, notifier);
    if let Some(model) = cli.model {
        // Infallible here: nothing can be generating before the REPL starts.
        let _ = controller.select_model(ModelId::new(model));
    }

    let mut repl = ChatRepl::new(controller, directory)
        .with_sort(config.display.sort)
        .with_columns(config.display.show_installed, config.display.show_size);
    repl.run().await?;

    Ok(())
}
