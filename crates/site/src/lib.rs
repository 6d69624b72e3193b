//! The AgroPure marketing site server.
//!
//! Server-rendered pages backed by the headless content store: each route
//! fetches its named projection, applies the fallback-merge view models
//! from `agropure-core`, and renders a Tera template.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;
