//! The content-source seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ContentError;

/// Anything that can answer a structured content query.
///
/// Implemented by [`crate::ContentClient`] (HTTP) and
/// [`crate::CachedContent`] (TTL cache wrapper); integration tests supply
/// an in-memory implementation with canned results.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a query with named parameters, returning the raw result value
    /// (`null` when no document matches).
    async fn query(&self, query: &str, params: &[(&str, Value)]) -> Result<Value, ContentError>;
}
