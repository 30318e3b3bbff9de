//! Console renderer for streamed responses.
//!
//! The controller hands over the full accumulated buffer on every chunk;
//! the renderer tracks how much of it has already been written and prints
//! only the suffix, so the response appears to type itself out.

use colored::Colorize;
use parley_application::{NotificationSink, Renderer};
use parley_domain::{Message, ModelId, Role, SessionId};
use std::io::Write;
use std::sync::Mutex;

#[derive(Default)]
struct StreamState {
    session: Option<SessionId>,
    printed: usize,
}

/// Streams assistant output to stdout as it arrives.
#[derive(Default)]
pub struct ConsoleRenderer {
    state: Mutex<StreamState>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for ConsoleRenderer {
    fn on_buffer_update(&self, session: SessionId, model: &ModelId, buffer: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.session != Some(session) {
            print!("\n{} ", format!("{}:", model).cyan().bold());
            state.session = Some(session);
            state.printed = 0;
        }
        // Chunks only append, so the unseen part is always a suffix.
        print!("{}", &buffer[state.printed..]);
        state.printed = buffer.len();
        let _ = std::io::stdout().flush();
    }

    fn on_commit(&self, _model: &ModelId, message: &Message) {
        if message.role != Role::Assistant {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.session.take().is_some() {
            println!();
            println!();
        }
    }

    fn on_generation_failed(&self, session: SessionId, _model: &ModelId, reason: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.session.take() == Some(session) && state.printed > 0 {
            println!();
        }
        println!("{}", format!("[error: {}]", reason).red());
    }
}

/// Prints notices to stderr.
#[derive(Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
