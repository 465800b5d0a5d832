//! Unified client over all public-record providers.
//!
//! Composition root: builds the six adapters from one injected config,
//! binds them into a registry, and fronts the dispatcher. The HTTP layer
//! holds one of these per process.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dispatch::{SearchDispatcher, ALL_CATEGORIES};
use crate::error::{SearchError, SearchResult};
use crate::providers::{
    BackgroundCheckProvider, BusinessRegistrationProvider, CourtRecordsProvider,
    GovernmentDataProvider, PropertyRecordsProvider, RecordProvider, UpstreamClient,
    VehicleRecordsProvider,
};
use crate::registry::CategoryRegistry;
use crate::types::{ProviderResult, RecordCategory, SearchQuery, SearchResponse};

pub struct PublicRecordClient {
    registry: Arc<CategoryRegistry>,
    dispatcher: SearchDispatcher,
    court: Arc<CourtRecordsProvider>,
    property: Arc<PropertyRecordsProvider>,
    business: Arc<BusinessRegistrationProvider>,
    government: Arc<GovernmentDataProvider>,
    background: Arc<BackgroundCheckProvider>,
    vehicle: Arc<VehicleRecordsProvider>,
}

impl PublicRecordClient {
    pub fn new(config: ClientConfig) -> SearchResult<Self> {
        let upstream = UpstreamClient::new(config.upstream_timeout)?;

        let court = Arc::new(CourtRecordsProvider::new(
            config.court_api_key.clone(),
            upstream.clone(),
        ));
        let property = Arc::new(PropertyRecordsProvider::new(
            config.property_api_key.clone(),
            upstream.clone(),
        ));
        let business = Arc::new(BusinessRegistrationProvider::new(
            config.business_api_key.clone(),
            upstream.clone(),
        ));
        let government = Arc::new(GovernmentDataProvider::new(
            config.government_api_key.clone(),
            upstream.clone(),
        ));
        let background = Arc::new(BackgroundCheckProvider::new(
            config.background_api_key.clone(),
            upstream.clone(),
        ));
        let vehicle = Arc::new(VehicleRecordsProvider::new(
            config.vehicle_api_key.clone(),
            upstream,
        ));

        let registry = Arc::new(
            CategoryRegistry::builder()
                .bind(RecordCategory::CourtRecords, court.clone())
                .bind(RecordCategory::PropertyRecords, property.clone())
                .bind(RecordCategory::BusinessRegistration, business.clone())
                .bind(RecordCategory::GovernmentData, government.clone())
                .bind(RecordCategory::BackgroundCheck, background.clone())
                .bind(RecordCategory::VehicleRecords, vehicle.clone())
                .build(),
        );
        let dispatcher = SearchDispatcher::new(registry.clone(), config.search_deadline);

        Ok(Self {
            registry,
            dispatcher,
            court,
            property,
            business,
            government,
            background,
            vehicle,
        })
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &SearchDispatcher {
        &self.dispatcher
    }

    /// Search every registered category.
    pub async fn search_all(&self, query: SearchQuery) -> SearchResult<SearchResponse> {
        self.dispatcher
            .dispatch(query, &[ALL_CATEGORIES.to_string()])
            .await
    }

    /// Search one category; the result is structurally identical to the
    /// corresponding entry of a full search response.
    pub async fn search_category(
        &self,
        category: RecordCategory,
        query: SearchQuery,
    ) -> SearchResult<ProviderResult> {
        let mut response = self
            .dispatcher
            .dispatch(query, &[category.as_str().to_string()])
            .await?;
        response
            .results
            .remove(&category)
            .ok_or_else(|| SearchError::UnknownCategory {
                token: category.as_str().to_string(),
            })
    }

    /// Search a record type addressed by wire token (accepts aliases).
    pub async fn search_by_type(
        &self,
        record_type: &str,
        query: SearchQuery,
    ) -> SearchResult<ProviderResult> {
        let category = Self::parse_type(record_type)?;
        self.search_category(category, query).await
    }

    /// Fetch one record by type and source-specific identifier.
    pub async fn get_record_by_type(
        &self,
        record_type: &str,
        record_id: &str,
    ) -> SearchResult<ProviderResult> {
        let category = Self::parse_type(record_type)?;
        let adapters = self.registry.adapters_for(category);
        match adapters.first() {
            Some(primary) => Ok(primary.get_record(record_id).await),
            None => Err(SearchError::UnknownCategory {
                token: record_type.to_string(),
            }),
        }
    }

    /// Canonical wire names of the supported categories.
    pub fn available_categories(&self) -> Vec<&'static str> {
        self.registry
            .list_categories()
            .into_iter()
            .map(|category| category.as_str())
            .collect()
    }

    /// Per-category configuration status.
    pub fn api_status(&self) -> std::collections::BTreeMap<RecordCategory, bool> {
        self.registry.status()
    }

    fn parse_type(record_type: &str) -> SearchResult<RecordCategory> {
        RecordCategory::parse(record_type).ok_or_else(|| SearchError::UnknownCategory {
            token: record_type.to_string(),
        })
    }

    pub fn court(&self) -> &CourtRecordsProvider {
        &self.court
    }

    pub fn property(&self) -> &PropertyRecordsProvider {
        &self.property
    }

    pub fn business(&self) -> &BusinessRegistrationProvider {
        &self.business
    }

    pub fn government(&self) -> &GovernmentDataProvider {
        &self.government
    }

    pub fn background(&self) -> &BackgroundCheckProvider {
        &self.background
    }

    pub fn vehicle(&self) -> &VehicleRecordsProvider {
        &self.vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_clients_report_independent_status() {
        let demo = PublicRecordClient::new(ClientConfig::unconfigured()).unwrap();

        let mut config = ClientConfig::unconfigured();
        config.court_api_key = Some("key-1".to_string());
        let live = PublicRecordClient::new(config).unwrap();

        assert!(!demo.api_status()[&RecordCategory::CourtRecords]);
        assert!(live.api_status()[&RecordCategory::CourtRecords]);
        assert!(!live.api_status()[&RecordCategory::VehicleRecords]);
    }

    #[test]
    fn status_lists_all_six_categories() {
        let client = PublicRecordClient::new(ClientConfig::unconfigured()).unwrap();
        let status = client.api_status();
        assert_eq!(status.len(), 6);
        assert!(status.values().all(|configured| !configured));
        assert_eq!(client.available_categories().len(), 6);
    }

    #[tokio::test]
    async fn unknown_record_type_is_rejected() {
        let client = PublicRecordClient::new(ClientConfig::unconfigured()).unwrap();
        let err = client
            .search_by_type("astral_records", SearchQuery::new("anything"))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::UnknownCategory { .. }));
    }

    #[tokio::test]
    async fn category_search_matches_full_search_entry() {
        let client = PublicRecordClient::new(ClientConfig::unconfigured()).unwrap();

        let single = client
            .search_category(
                RecordCategory::BusinessRegistration,
                SearchQuery::new("Acme Corp"),
            )
            .await
            .unwrap();
        let full = client.search_all(SearchQuery::new("Acme Corp")).await.unwrap();

        assert_eq!(
            Some(&single),
            full.results.get(&RecordCategory::BusinessRegistration)
        );
    }
}
