//! Model identity and directory value objects.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Identifier of an LLM model (Value Object)
///
/// An opaque name as reported by the model directory, e.g. `llama3:8b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A model as listed by the directory.
///
/// `installed` is a display-ready timestamp (`YYYY-MM-DD HH:MM:SS`, sortable
/// lexicographically) and `size_mb` the on-disk size in megabytes. Both may
/// be empty/zero when the directory omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: ModelId,
    #[serde(default)]
    pub installed: String,
    #[serde(default)]
    pub size_mb: f64,
}

/// Sort order for the model directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSort {
    NameAsc,
    NameDesc,
    DateAsc,
    #[default]
    DateDesc,
    SizeAsc,
    SizeDesc,
}

impl ModelSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSort::NameAsc => "name_asc",
            ModelSort::NameDesc => "name_desc",
            ModelSort::DateAsc => "date_asc",
            ModelSort::DateDesc => "date_desc",
            ModelSort::SizeAsc => "size_asc",
            ModelSort::SizeDesc => "size_desc",
        }
    }
}

impl std::fmt::Display for ModelSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognized sort order string.
#[derive(Debug, Error)]
#[error("unknown sort order: {0} (expected name_asc, name_desc, date_asc, date_desc, size_asc or size_desc)")]
pub struct ParseSortError(String);

impl FromStr for ModelSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name_asc" => ModelSort::NameAsc,
            "name_desc" => ModelSort::NameDesc,
            "date_asc" => ModelSort::DateAsc,
            "date_desc" => ModelSort::DateDesc,
            "size_asc" => ModelSort::SizeAsc,
            "size_desc" => ModelSort::SizeDesc,
            other => return Err(ParseSortError(other.to_string())),
        })
    }
}

/// Sort a directory listing in place.
///
/// Date ordering compares the display timestamps, which sort correctly as
/// strings in their `YYYY-MM-DD HH:MM:SS` form.
pub fn sort_models(models: &mut [ModelInfo], sort: ModelSort) {
    match sort {
        ModelSort::NameAsc => models.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str())),
        ModelSort::NameDesc => models.sort_by(|a, b| b.name.as_str().cmp(a.name.as_str())),
        ModelSort::DateAsc => models.sort_by(|a, b| a.installed.cmp(&b.installed)),
        ModelSort::DateDesc => models.sort_by(|a, b| b.installed.cmp(&a.installed)),
        ModelSort::SizeAsc => models.sort_by(|a, b| a.size_mb.total_cmp(&b.size_mb)),
        ModelSort::SizeDesc => models.sort_by(|a, b| b.size_mb.total_cmp(&a.size_mb)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, installed: &str, size_mb: f64) -> ModelInfo {
        ModelInfo {
            name: ModelId::new(name),
            installed: installed.to_string(),
            size_mb,
        }
    }

    fn names(models: &[ModelInfo]) -> Vec<&str> {
        models.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn sort_order_parse_roundtrip() {
        for sort in [
            ModelSort::NameAsc,
            ModelSort::NameDesc,
            ModelSort::DateAsc,
            ModelSort::DateDesc,
            ModelSort::SizeAsc,
            ModelSort::SizeDesc,
        ] {
            let parsed: ModelSort = sort.as_str().parse().unwrap();
            assert_eq!(parsed, sort);
        }
    }

    #[test]
    fn unknown_sort_order_is_an_error() {
        assert!("biggest_first".parse::<ModelSort>().is_err());
    }

    #[test]
    fn default_sort_is_newest_first() {
        assert_eq!(ModelSort::default(), ModelSort::DateDesc);
    }

    #[test]
    fn sorts_by_name() {
        let mut models = vec![info("b", "", 0.0), info("a", "", 0.0), info("c", "", 0.0)];
        sort_models(&mut models, ModelSort::NameAsc);
        assert_eq!(names(&models), ["a", "b", "c"]);
        sort_models(&mut models, ModelSort::NameDesc);
        assert_eq!(names(&models), ["c", "b", "a"]);
    }

    #[test]
    fn sorts_by_installed_date() {
        let mut models = vec![
            info("old", "2024-01-02 10:00:00", 0.0),
            info("new", "2025-06-01 09:30:00", 0.0),
        ];
        sort_models(&mut models, ModelSort::DateDesc);
        assert_eq!(names(&models), ["new", "old"]);
        sort_models(&mut models, ModelSort::DateAsc);
        assert_eq!(names(&models), ["old", "new"]);
    }

    #[test]
    fn sorts_by_size() {
        let mut models = vec![info("big", "", 4200.5), info("small", "", 12.25)];
        sort_models(&mut models, ModelSort::SizeAsc);
        assert_eq!(names(&models), ["small", "big"]);
        sort_models(&mut models, ModelSort::SizeDesc);
        assert_eq!(names(&models), ["big", "small"]);
    }

    #[test]
    fn model_id_serializes_as_bare_string() {
        let json = serde_json::to_value(ModelId::new("llama3:8b")).unwrap();
        assert_eq!(json, "llama3:8b");
    }
}
