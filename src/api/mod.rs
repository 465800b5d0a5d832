//! REST API module for the public-record search core.
//!
//! This module provides the HTTP endpoints over the unified client,
//! allowing external clients to search and inspect provider status.

#[cfg(feature = "server")]
pub mod record_routes;

#[cfg(feature = "server")]
pub mod search_routes;

#[cfg(feature = "server")]
pub use search_routes::{create_router, AppState};
