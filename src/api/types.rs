//! Wire models for the search backend API

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder snippet for documents the backend returned without content.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content preview available.";

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub max_results: usize,
}

/// One retrieved document.
///
/// Only `id` is required. The backend nominally sends string ids, but
/// numeric ids show up in the wild, so both are accepted and normalized
/// to text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl SearchResult {
    /// Title to display: the document's own, or a synthesized label.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Document #{}", self.id),
        }
    }

    /// Snippet to display, falling back to a fixed placeholder.
    pub fn snippet(&self) -> &str {
        self.content.as_deref().unwrap_or(NO_CONTENT_PLACEHOLDER)
    }

    /// Relevance as a percentage in [0, 100]. Missing or negative scores
    /// render as zero, never as an error.
    pub fn score_percent(&self) -> f64 {
        match self.score {
            Some(score) => (score * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Pull the result list out of a decoded response body.
///
/// A missing or malformed `results` field means "no results", not an error;
/// the backend's extra envelope fields (`query`, `total_results`,
/// `execution_time`) are ignored.
pub fn results_from_body(body: &serde_json::Value) -> Vec<SearchResult> {
    body.get("results")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    /// The fixed value substituted when the probe fails in any way.
    pub fn unavailable() -> Self {
        Self {
            status: "error".to_string(),
            message: Some("Backend unavailable".to_string()),
        }
    }

    /// The backend reports `"healthy"` when it is up.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_accepts_string_and_numeric_ids() {
        let from_string: SearchResult =
            serde_json::from_value(json!({"id": "doc-7", "title": "A"})).unwrap();
        assert_eq!(from_string.id, "doc-7");

        let from_number: SearchResult = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(from_number.id, "1");
    }

    #[test]
    fn display_title_falls_back_to_id_label() {
        let result: SearchResult = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(result.display_title(), "Document #42");

        let titled: SearchResult =
            serde_json::from_value(json!({"id": 42, "title": "Rust in Production"})).unwrap();
        assert_eq!(titled.display_title(), "Rust in Production");
    }

    #[test]
    fn snippet_falls_back_to_placeholder() {
        let result: SearchResult = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(result.snippet(), NO_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn score_percent_clamps_and_defaults() {
        let scored: SearchResult =
            serde_json::from_value(json!({"id": 1, "score": 0.873})).unwrap();
        assert!((scored.score_percent() - 87.3).abs() < 1e-9);

        let zero: SearchResult = serde_json::from_value(json!({"id": 2, "score": 0})).unwrap();
        assert_eq!(zero.score_percent(), 0.0);

        let missing: SearchResult = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(missing.score_percent(), 0.0);

        let negative: SearchResult =
            serde_json::from_value(json!({"id": 4, "score": -0.4})).unwrap();
        assert_eq!(negative.score_percent(), 0.0);

        let oversized: SearchResult =
            serde_json::from_value(json!({"id": 5, "score": 1.7})).unwrap();
        assert_eq!(oversized.score_percent(), 100.0);
    }

    #[test]
    fn results_from_body_preserves_backend_order() {
        let body = json!({
            "query": "rust",
            "results": [
                {"id": 1, "score": 0.873, "title": "A"},
                {"id": 2, "score": 0, "title": "B"},
            ],
            "total_results": 2,
            "execution_time": 0.012,
        });

        let results = results_from_body(&body);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn missing_or_malformed_results_field_is_empty_not_error() {
        assert!(results_from_body(&json!({"status": "done"})).is_empty());
        assert!(results_from_body(&json!({"results": 5})).is_empty());
        assert!(results_from_body(&json!({"results": [{"title": "no id"}]})).is_empty());
    }

    #[test]
    fn unavailable_health_is_the_fixed_degraded_value() {
        let health = HealthStatus::unavailable();
        assert_eq!(health.status, "error");
        assert_eq!(health.message.as_deref(), Some("Backend unavailable"));
        assert!(!health.is_healthy());
    }
}
