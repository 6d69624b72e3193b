#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use agropure_content::{ContentConfig, ContentError, ContentSource};
use agropure_site::config::SiteConfig;
use agropure_site::router::build_app_router;
use agropure_site::state::AppState;
use agropure_site::templates;

/// Canned content source keyed by query text. Queries with no canned
/// response return `null`, which the fetch layer treats as an empty
/// store.
#[derive(Default)]
pub struct StaticContent {
    responses: HashMap<String, Value>,
}

impl StaticContent {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, result: Value) -> Self {
        self.responses.insert(query.to_string(), result);
        self
    }
}

#[async_trait]
impl ContentSource for StaticContent {
    async fn query(&self, query: &str, _params: &[(&str, Value)]) -> Result<Value, ContentError> {
        Ok(self
            .responses
            .get(query)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

/// Content source that fails every query, for exercising the 502 path.
pub struct FailingContent;

#[async_trait]
impl ContentSource for FailingContent {
    async fn query(&self, _q: &str, _p: &[(&str, Value)]) -> Result<Value, ContentError> {
        Err(ContentError::Status {
            status: 500,
            body: "upstream down".into(),
        })
    }
}

/// Build a test `SiteConfig` with safe defaults (no environment reads).
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        content: ContentConfig {
            project_id: "35ik4q2e".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: false,
            token: None,
        },
        content_cache_ttl: Duration::from_secs(60),
        studio_url: "http://localhost:3333".to_string(),
        asset_dir: "static".to_string(),
    }
}

/// Build the full application router against the given content source.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, compression,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(content: impl ContentSource + 'static) -> Router {
    let config = test_config();
    let tera = templates::build(&config.content.project_id, &config.content.dataset)
        .expect("template set must compile");

    let state = AppState {
        content: Arc::new(content),
        config: Arc::new(config.clone()),
        templates: Arc::new(tera),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body must be UTF-8")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("body must be JSON")
}
