//! Domain layer for the AgroPure marketing site.
//!
//! Holds the CMS document shapes, the literal default/demo content, the
//! fallback-merge view-model builders, and the outbound link builders.
//! Everything here is pure: no I/O, no async.

pub mod content;
pub mod defaults;
pub mod error;
pub mod links;
pub mod slug;
pub mod view;
