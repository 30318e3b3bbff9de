//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use parley_domain::ModelSort;
use serde::{Deserialize, Serialize};

/// Endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// WebSocket URL of the chat streaming endpoint
    pub chat_url: String,
    /// Base URL of the Ollama HTTP API
    pub ollama_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            chat_url: "ws://127.0.0.1:8001/ws/chat".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
        }
    }
}

/// Display configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Sort order for the model listing
    pub sort: ModelSort,
    /// Show the installed date column
    pub show_installed: bool,
    /// Show the size column
    pub show_size: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort: ModelSort::default(),
            show_installed: true,
            show_size: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Endpoint settings
    pub endpoints: EndpointsConfig,
    /// Display settings
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_services() {
        let config = FileConfig::default();
        assert_eq!(config.endpoints.chat_url, "ws://127.0.0.1:8001/ws/chat");
        assert_eq!(config.endpoints.ollama_url, "http://localhost:11434");
        assert_eq!(config.display.sort, ModelSort::DateDesc);
        assert!(config.display.show_installed);
        assert!(config.display.show_size);
    }

    #[test]
    fn deserialize_full_config() {
        let toml_str = r#"
[endpoints]
chat_url = "ws://chat.example.com/ws/chat"
ollama_url = "http://ollama.example.com:11434"

[display]
sort = "size_desc"
show_installed = false
show_size = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoints.chat_url, "ws://chat.example.com/ws/chat");
        assert_eq!(config.display.sort, ModelSort::SizeDesc);
        assert!(!config.display.show_installed);
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[display]
sort = "name_asc"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.sort, ModelSort::NameAsc);
        // Defaults should apply
        assert_eq!(config.endpoints.ollama_url, "http://localhost:11434");
        assert!(config.display.show_size);
    }
}
