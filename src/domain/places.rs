//! Response shapes of the places-search and reviews endpoints.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! payload is ignored. Every field is optional so that sparse entries reach
//! the resolver and fetcher instead of failing the whole response.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub local_results: Vec<LocalResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocalResult {
    pub title: Option<String>,
    pub place_id: Option<String>,
}

impl LocalResult {
    /// Name and place id, when both are present and non-empty.
    pub fn identity(&self) -> Option<(&str, &str)> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let place_id = self.place_id.as_deref().filter(|p| !p.is_empty())?;
        Some((title, place_id))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawReview {
    /// Either a plain name or an object such as `{"name": ..., "link": ...}`.
    pub user: Option<Value>,
    pub rating: Option<Value>,
    pub snippet: Option<Value>,
    pub date: Option<Value>,
}

impl RawReview {
    pub fn username(&self) -> Option<String> {
        match self.user.as_ref()? {
            Value::String(name) => Some(name.clone()),
            Value::Object(fields) => fields.get("name").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<String> {
        self.snippet.as_ref().and_then(scalar_text)
    }

    pub fn date(&self) -> Option<String> {
        self.date.as_ref().and_then(scalar_text)
    }

    pub fn rating(&self) -> Option<f64> {
        match self.rating.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Strings pass through; numbers and booleans keep their JSON text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
