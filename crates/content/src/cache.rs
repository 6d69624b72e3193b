//! Time-boxed read-through cache over a [`ContentSource`].
//!
//! Each distinct (query, params) pair is cached for a fixed TTL; the next
//! read after expiry re-fetches from the wrapped source. There is no
//! invalidation signal -- editors see their changes after at most one TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::client::ContentError;
use crate::source::ContentSource;

/// Default revalidation window, matching the original one-minute policy.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    fetched_at: Instant,
    value: Value,
}

pub struct CachedContent<S> {
    inner: S,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl<S: ContentSource> CachedContent<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn cache_key(query: &str, params: &[(&str, Value)]) -> String {
        let mut key = String::from(query);
        for (name, value) in params {
            key.push('\u{1f}');
            key.push_str(name);
            key.push('=');
            key.push_str(&value.to_string());
        }
        key
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for CachedContent<S> {
    async fn query(&self, query: &str, params: &[(&str, Value)]) -> Result<Value, ContentError> {
        let key = Self::cache_key(query, params);

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.value.clone());
                }
            }
        }

        // Stale or missing: fetch and replace. Concurrent misses may fetch
        // twice; the last write wins and both see fresh data.
        let value = self.inner.query(query, params).await?;
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }
}
