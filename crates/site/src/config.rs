use std::time::Duration;

use agropure_content::ContentConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Content store connection settings.
    pub content: ContentConfig,
    /// Read-through cache TTL for content queries (default: 60 s).
    pub content_cache_ttl: Duration,
    /// Externally hosted CMS editor, linked from `/admin`.
    pub studio_url: String,
    /// Directory served under `/static`.
    pub asset_dir: String,
}

impl SiteConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                   |
    /// |--------------------------|---------------------------|
    /// | `HOST`                   | `0.0.0.0`                 |
    /// | `PORT`                   | `8080`                    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                      |
    /// | `CONTENT_PROJECT_ID`     | `35ik4q2e`                |
    /// | `CONTENT_DATASET`        | `production`              |
    /// | `CONTENT_API_VERSION`    | `2024-01-01`              |
    /// | `CONTENT_USE_CDN`        | `false`                   |
    /// | `CONTENT_TOKEN`          | (unset)                   |
    /// | `CONTENT_CACHE_TTL_SECS` | `60`                      |
    /// | `STUDIO_URL`             | `http://localhost:3333`   |
    /// | `ASSET_DIR`              | `crates/site/static`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let content = ContentConfig {
            project_id: std::env::var("CONTENT_PROJECT_ID").unwrap_or_else(|_| "35ik4q2e".into()),
            dataset: std::env::var("CONTENT_DATASET").unwrap_or_else(|_| "production".into()),
            api_version: std::env::var("CONTENT_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".into()),
            use_cdn: std::env::var("CONTENT_USE_CDN")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            token: std::env::var("CONTENT_TOKEN").ok().filter(|t| !t.is_empty()),
        };

        let content_cache_ttl = Duration::from_secs(
            std::env::var("CONTENT_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .expect("CONTENT_CACHE_TTL_SECS must be a valid u64"),
        );

        let studio_url =
            std::env::var("STUDIO_URL").unwrap_or_else(|_| "http://localhost:3333".into());

        let asset_dir =
            std::env::var("ASSET_DIR").unwrap_or_else(|_| "crates/site/static".into());

        Self {
            host,
            port,
            request_timeout_secs,
            content,
            content_cache_ttl,
            studio_url,
            asset_dir,
        }
    }
}
