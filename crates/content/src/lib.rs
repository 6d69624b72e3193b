//! Content-store integration for the AgroPure marketing site.
//!
//! Three concerns live here:
//!
//! - the declarative content schema (the seven editable document types and
//!   their write-time validation rules),
//! - the query layer (GROQ text, HTTP client, TTL read-through cache, the
//!   [`ContentSource`] seam, typed per-route fetchers),
//! - the image CDN URL builder.

pub mod cache;
pub mod client;
pub mod fetch;
pub mod image;
pub mod query;
pub mod schema;
pub mod source;

pub use cache::CachedContent;
pub use client::{ContentClient, ContentConfig, ContentError};
pub use source::ContentSource;
