//! Model directory port
//!
//! Defines the interface for listing the selectable models. The core only
//! needs the name to bind a session; installed date and size are carried
//! for display.

use async_trait::async_trait;
use parley_domain::{ModelInfo, ModelSort};
use thiserror::Error;

/// Errors that can occur while listing models
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Catalog of selectable models.
#[async_trait]
pub trait ModelDirectory: Send + Sync {
    /// List the available models in the requested order.
    async fn list(&self, sort: ModelSort) -> Result<Vec<ModelInfo>, DirectoryError>;
}
