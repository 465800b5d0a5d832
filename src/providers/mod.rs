//! Provider adapters for the public-record categories.
//!
//! Each adapter wraps one external data source behind the [`RecordProvider`]
//! trait. Whether an adapter runs its live or demo path is decided once at
//! construction from the injected credentials; the two paths are separate
//! functions behind the same interface, never flag branching at call sites.

pub mod background;
pub mod business;
pub mod court;
pub mod government;
pub mod property;
pub mod upstream;
pub mod vehicle;

pub use background::BackgroundCheckProvider;
pub use business::BusinessRegistrationProvider;
pub use court::CourtRecordsProvider;
pub use government::GovernmentDataProvider;
pub use property::PropertyRecordsProvider;
pub use upstream::UpstreamClient;
pub use vehicle::VehicleRecordsProvider;

use async_trait::async_trait;

use crate::types::{ProviderResult, RecordCategory, SearchQuery};

/// Uniform capability over one external public-record source.
///
/// Implementations never return `Err` or panic for expected failure modes
/// (missing credentials, upstream HTTP errors, timeouts, malformed
/// responses); every outcome is a [`ProviderResult`]. Adapters hold no
/// per-request state; the only shared resource is the pooled HTTP client.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Category this adapter serves.
    fn category(&self) -> RecordCategory;

    /// True when real upstream credentials were supplied at construction.
    /// Immutable for the process lifetime.
    fn is_configured(&self) -> bool;

    /// Free-text search over this source.
    async fn search(&self, query: &SearchQuery) -> ProviderResult;

    /// Fetch a single record by source-specific identifier.
    async fn get_record(&self, record_id: &str) -> ProviderResult;
}
