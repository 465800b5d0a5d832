//! Public Records search core.
//!
//! This crate fans a free-text query out across per-category public-record
//! providers (court, property, business, government, background-check,
//! vehicle) and merges the responses into one envelope. Providers without
//! upstream credentials run in demo mode and return deterministic placeholder
//! payloads flagged with a `"Mock implementation"` marker.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use public_records::client::PublicRecordClient;
//! use public_records::config::ClientConfig;
//! use public_records::types::SearchQuery;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PublicRecordClient::new(ClientConfig::unconfigured())?;
//! let response = client.search_all(SearchQuery::new("Acme Corp")).await?;
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Wire and domain types
pub mod types;

// Environment-derived configuration
pub mod config;

// Provider adapters for external data sources
pub mod providers;

// Category registry and status reporting
pub mod registry;

// Search dispatcher (fan-out and merge)
pub mod dispatch;

// Unified client over all providers
pub mod client;

// REST API surface (when enabled)
#[cfg(feature = "server")]
pub mod api;

pub use client::PublicRecordClient;
pub use config::ClientConfig;
pub use error::{SearchError, SearchResult};
pub use types::{ProviderResult, RecordCategory, SearchQuery, SearchResponse};
