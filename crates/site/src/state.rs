use std::sync::Arc;

use tera::Tera;

use agropure_content::ContentSource;

use crate::config::SiteConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Content source (HTTP client behind the TTL cache in production,
    /// canned data in tests).
    pub content: Arc<dyn ContentSource>,
    /// Server configuration.
    pub config: Arc<SiteConfig>,
    /// Compiled template set.
    pub templates: Arc<Tera>,
}
