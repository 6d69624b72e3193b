//! HTTP client for the hosted content store's query API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::source::ContentSource;

/// Connection settings for one content project.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Project identifier (e.g. `35ik4q2e`).
    pub project_id: String,
    /// Dataset name (e.g. `production`).
    pub dataset: String,
    /// API version date (e.g. `2024-01-01`).
    pub api_version: String,
    /// Use the CDN-backed endpoint (stale-tolerant reads) instead of the
    /// live API host.
    pub use_cdn: bool,
    /// Bearer token for private datasets.
    pub token: Option<String>,
}

impl ContentConfig {
    /// Query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{host}.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }
}

/// Errors from the content store boundary.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Content store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode content result: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The query API wraps every result in `{"result": ...}`.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// Read-only client for the content store's HTTP query API.
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn query(&self, query: &str, params: &[(&str, Value)]) -> Result<Value, ContentError> {
        // Named parameters travel as `$name=<json literal>` query-string
        // pairs alongside the query text.
        let mut pairs: Vec<(String, String)> = vec![("query".into(), query.into())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let mut request = self.http.get(self.config.query_url()).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "content query rejected");
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: QueryResponse = response.json().await?;
        Ok(decoded.result)
    }
}
