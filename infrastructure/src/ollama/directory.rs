//! Model directory backed by the Ollama `/api/tags` endpoint.

use async_trait::async_trait;
use chrono::DateTime;
use parley_application::{DirectoryError, ModelDirectory};
use parley_domain::{ModelId, ModelInfo, ModelSort, sort_models};
use serde::Deserialize;
use tracing::debug;

/// Lists locally installed models from an Ollama server.
pub struct OllamaModelDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaModelDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ModelDirectory for OllamaModelDirectory {
    async fn list(&self, sort: ModelSort) -> Result<Vec<ModelInfo>, DirectoryError> {
        let url = format!("{}/api/tags", self.base_url);
        debug!(%url, "fetching model listing");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| DirectoryError::Request(e.to_string()))?;
        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))?;

        let mut models: Vec<ModelInfo> = tags.models.into_iter().map(ModelInfo::from).collect();
        sort_models(&mut models, sort);
        Ok(models)
    }
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
    #[serde(default)]
    modified_at: String,
    #[serde(default)]
    size: u64,
}

impl From<TagEntry> for ModelInfo {
    fn from(entry: TagEntry) -> Self {
        ModelInfo {
            name: ModelId::new(entry.name),
            installed: format_installed(&entry.modified_at),
            size_mb: to_megabytes(entry.size),
        }
    }
}

/// Reformat Ollama's RFC 3339 timestamp for display; lexicographic order of
/// the result matches chronological order. Unparseable input passes through
/// untouched.
fn format_installed(modified_at: &str) -> String {
    match DateTime::parse_from_rfc3339(modified_at) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => modified_at.to_string(),
    }
}

fn to_megabytes(bytes: u64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_entry_maps_to_model_info() {
        let entry = TagEntry {
            name: "llama3:8b".to_string(),
            modified_at: "2025-03-14T09:26:53.589Z".to_string(),
            size: 4_661_211_136,
        };
        let info = ModelInfo::from(entry);
        assert_eq!(info.name, ModelId::new("llama3:8b"));
        assert_eq!(info.installed, "2025-03-14 09:26:53");
        assert_eq!(info.size_mb, 4445.28);
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_installed("not a date"), "not a date");
        assert_eq!(format_installed(""), "");
    }

    #[test]
    fn timestamp_keeps_offset_local_time() {
        assert_eq!(
            format_installed("2024-11-02T17:30:00+09:00"),
            "2024-11-02 17:30:00"
        );
    }

    #[test]
    fn size_is_rounded_to_two_decimals() {
        assert_eq!(to_megabytes(0), 0.0);
        assert_eq!(to_megabytes(1024 * 1024), 1.0);
        assert_eq!(to_megabytes(1_500_000), 1.43);
    }

    #[test]
    fn tags_response_tolerates_missing_fields() {
        let parsed: TagsResponse =
            serde_json::from_str(r#"{"models": [{"name": "phi3:mini"}]}"#).unwrap();
        assert_eq!(parsed.models.len(), 1);
        let info = ModelInfo::from(parsed.models.into_iter().next().unwrap());
        assert_eq!(info.installed, "");
        assert_eq!(info.size_mb, 0.0);
    }

    #[test]
    fn empty_listing_parses() {
        let parsed: TagsResponse = serde_json::from_str(r#"{"models": []}"#).unwrap();
        assert!(parsed.models.is_empty());
    }
}
