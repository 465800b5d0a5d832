//! Property records adapter.
//!
//! The live path goes through RentCast for both record search and
//! valuations. Address lookups and valuations follow the same result
//! contract as free-text search.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const RENTCAST_API_BASE: &str = "https://api.rentcast.io/v1";

pub struct PropertyRecordsProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl PropertyRecordsProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    async fn live_search(&self, key: &str, query: &SearchQuery) -> ProviderResult {
        let url = format!("{}/properties", RENTCAST_API_BASE);
        match self
            .upstream
            .get_json(&url, Some(key), &[("address", query.text.as_str())])
            .await
        {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::PropertyRecords.as_str(),
                "query": query.text,
                "filters": &query.filters,
                "source": "rentcast",
                "results": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::PropertyRecords.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    /// Look a parcel up by street address.
    pub async fn get_by_address(&self, address: &str, city: &str, state: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/properties", RENTCAST_API_BASE);
                match self
                    .upstream
                    .get_json(
                        &url,
                        Some(key),
                        &[("address", address), ("city", city), ("state", state)],
                    )
                    .await
                {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::PropertyRecords.as_str(),
                        "address": address,
                        "city": city,
                        "state": state,
                        "source": "rentcast",
                        "results": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::PropertyRecords.as_str(),
                "address": address,
                "city": city,
                "state": state,
                "results": [],
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }

    /// Automated valuation for an address.
    pub async fn get_valuation(&self, address: &str, filters: Map<String, Value>) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/avm/value", RENTCAST_API_BASE);
                match self
                    .upstream
                    .get_json(&url, Some(key), &[("address", address)])
                    .await
                {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::PropertyRecords.as_str(),
                        "address": address,
                        "filters": filters,
                        "source": "rentcast",
                        "valuation": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::PropertyRecords.as_str(),
                "address": address,
                "filters": filters,
                "valuation": {},
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for PropertyRecordsProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::PropertyRecords
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &SearchQuery) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => self.live_search(key, query).await,
            None => self.mock_search(query),
        }
    }

    async fn get_record(&self, property_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/properties/{}", RENTCAST_API_BASE, property_id);
                match self.upstream.get_json(&url, Some(key), &[]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::PropertyRecords.as_str(),
                        "property_id": property_id,
                        "source": "rentcast",
                        "details": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::PropertyRecords.as_str(),
                "property_id": property_id,
                "details": {},
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn demo_valuation_is_deterministic() {
        let upstream = UpstreamClient::new(ClientConfig::unconfigured().upstream_timeout).unwrap();
        let provider = PropertyRecordsProvider::new(None, upstream);

        let first = provider.get_valuation("1 Main St", Map::new()).await;
        let second = provider.get_valuation("1 Main St", Map::new()).await;
        assert_eq!(first, second);
        assert!(first.is_mock());
    }
}
