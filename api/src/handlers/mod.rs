//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod items;

pub use items::{create_item, delete_item, get_item, list_items};
