//! REPL (Read-Eval-Print Loop) for interactive chat

use colored::Colorize;
use parley_application::{ChatController, ModelDirectory};
use parley_domain::{ModelId, ModelSort};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatController,
    directory: Arc<dyn ModelDirectory>,
    sort: ModelSort,
    show_installed: bool,
    show_size: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController, directory: Arc<dyn ModelDirectory>) -> Self {
        Self {
            controller,
            directory,
            sort: ModelSort::default(),
            show_installed: true,
            show_size: true,
        }
    }

    /// Set the model listing sort order
    pub fn with_sort(mut self, sort: ModelSort) -> Self {
        self.sort = sort;
        self
    }

    /// Set which listing columns to show
    pub fn with_columns(mut self, show_installed: bool, show_size: bool) -> Self {
        self.show_installed = show_installed;
        self.show_size = show_size;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("ollama-parley").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        if self.controller.active_model().is_none() {
            self.auto_select_model().await;
        }

        loop {
            let prompt = match self.controller.active_model() {
                Some(model) => format!("{} >>> ", model),
                None => ">>> ".to_string(),
            };

            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.send_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Ollama Parley - Chat             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a message to chat, Ctrl+C to stop a response.");
        println!("Commands:");
        println!("  /models        - List available models");
        println!("  /use <model>   - Switch to a model");
        println!("  /clear         - Clear this model's conversation");
        println!("  /help          - Show this help");
        println!("  /quit          - Exit chat");
        println!();
    }

    /// Pick the first listed model when none was chosen up front.
    async fn auto_select_model(&mut self) {
        match self.directory.list(self.sort).await {
            Ok(models) => {
                if let Some(first) = models.first() {
                    let _ = self.controller.select_model(first.name.clone());
                    println!("Using model: {}\n", first.name.to_string().cyan());
                } else {
                    println!("No models installed. Pull one with `ollama pull` first.\n");
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Could not list models: {}", e).yellow());
            }
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        match parts.next().unwrap_or_default() {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
                false
            }
            "/models" => {
                self.list_models().await;
                false
            }
            "/use" => {
                match parts.next() {
                    Some(name) => {
                        let model = ModelId::new(name);
                        if self.controller.select_model(model.clone()).is_ok() {
                            println!("Now chatting with {}", model.to_string().cyan());
                        }
                    }
                    None => println!("Usage: /use <model>"),
                }
                false
            }
            "/clear" => {
                self.controller.clear();
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn list_models(&self) {
        let models = match self.directory.list(self.sort).await {
            Ok(models) => models,
            Err(e) => {
                eprintln!("{}", format!("Could not list models: {}", e).yellow());
                return;
            }
        };
        if models.is_empty() {
            println!("No models installed.");
            return;
        }

        println!();
        for info in &models {
            let marker = if self.controller.active_model() == Some(&info.name) {
                "*"
            } else {
                " "
            };
            let mut line = format!("{} {:<30}", marker, info.name);
            if self.show_installed && !info.installed.is_empty() {
                line.push_str(&format!("  {}", info.installed));
            }
            if self.show_size && info.size_mb > 0.0 {
                line.push_str(&format!("  {:>9.2} MB", info.size_mb));
            }
            println!("{}", line);
        }
        println!();
    }

    /// Submit one message and drive the stream until it reaches a terminal
    /// state. Ctrl+C stops the generation without leaving the REPL.
    async fn send_message(&mut self, text: &str) {
        if self.controller.submit(text).is_err() {
            // Denials are reported through the notification sink.
            return;
        }

        while self.controller.is_generating() {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    self.controller.cancel();
                }
                state = self.controller.pump() => {
                    if state.is_none() && !self.controller.is_generating() {
                        break;
                    }
                }
            }
        }
    }
}
