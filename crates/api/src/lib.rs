//! Async HTTP client for the three Tweetscope backend endpoints:
//! `GET /filters`, `GET /search`, and `GET /query`.
//!
//! The client performs no retrieval or ranking of its own — it ships the
//! parameter list built by `tweetscope-core::query` and decodes the JSON
//! response. No retries, no caching; callers collapse errors to a single
//! user-visible message at the operation boundary.

use serde::Deserialize;
use thiserror::Error;

use tweetscope_core::types::{FilterOptions, SearchResponse};

/// Backend base URL when `TWEETSCOPE_API` is unset.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Resolve the backend base URL from the environment.
pub fn api_base_from_env() -> String {
    std::env::var("TWEETSCOPE_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Everything that can go wrong talking to the backend: transport failure,
/// a non-success status, or a body that does not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    #[serde(default)]
    gpt_response: String,
}

/// Thin wrapper over one shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at `TWEETSCOPE_API`, defaulting to localhost.
    pub fn from_env() -> Self {
        Self::new(api_base_from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base);
        tracing::debug!(%url, params = params.len(), "backend request");
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    /// Fetch the filter catalog. Called once at startup; a failure leaves
    /// the catalog empty and the widgets degrade to empty option lists.
    pub async fn fetch_filters(&self) -> Result<FilterOptions, ApiError> {
        self.get_json("/filters", &[]).await
    }

    /// Run one search with a parameter list from `build_search_params`.
    pub async fn search(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<SearchResponse, ApiError> {
        self.get_json("/search", params).await
    }

    /// Ask the LLM one question over the current filter context, with a
    /// parameter list from `build_ask_params`. Returns the answer text.
    pub async fn ask(&self, params: &[(&'static str, String)]) -> Result<String, ApiError> {
        let answer: AskResponse = self.get_json("/query", params).await?;
        Ok(answer.gpt_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn ask_response_tolerates_missing_field() {
        let decoded: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.gpt_response, "");

        let decoded: AskResponse =
            serde_json::from_str(r#"{"gpt_response":"mostly bearish"}"#).unwrap();
        assert_eq!(decoded.gpt_response, "mostly bearish");
    }
}
