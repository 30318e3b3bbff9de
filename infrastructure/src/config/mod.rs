//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{DisplayConfig, EndpointsConfig, FileConfig};
pub use loader::ConfigLoader;
