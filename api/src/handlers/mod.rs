//! HTTP handlers
//!
//! Axum request handlers for the journal endpoints.

pub mod entries;

pub use entries::{create_entry, get_journal};
