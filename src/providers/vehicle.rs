//! Vehicle and DMV records adapter.
//!
//! VIN decoding goes through the NHTSA vPIC catalog; full vehicle history
//! requires VINData credentials. The VINData key is the configuration signal
//! for this category.

use async_trait::async_trait;
use serde_json::json;

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const NHTSA_VPIC_API_BASE: &str = "https://vpic.nhtsa.dot.gov/api";
const VINDATA_API_BASE: &str = "https://api.vindata.com";

pub struct VehicleRecordsProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl VehicleRecordsProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::VehicleRecords.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Use the VIN decode endpoint for VIN lookups.",
        }))
    }

    /// Decode a VIN. The vPIC catalog itself is keyless; the adapter still
    /// follows the live/demo split so unconfigured deployments stay fully
    /// deterministic.
    pub async fn decode_vin(&self, vin: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(_) => {
                let url = format!("{}/vehicles/DecodeVin/{}", NHTSA_VPIC_API_BASE, vin);
                match self.upstream.get_json(&url, None, &[("format", "json")]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::VehicleRecords.as_str(),
                        "source": "nhtsa_vpic",
                        "vin": vin,
                        "results": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::VehicleRecords.as_str(),
                "source": "nhtsa_vpic",
                "vin": vin,
                "data_available": [
                    "make",
                    "model",
                    "model_year",
                    "body_class",
                    "engine_info",
                    "manufacturer",
                ],
                "message": "Mock implementation. NHTSA vPIC provides free VIN decoding.",
            })),
        }
    }

    /// Title, salvage, and accident history for a VIN.
    pub async fn get_vehicle_history(&self, vin: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/v1/products/history/{}", VINDATA_API_BASE, vin);
                match self.upstream.get_json(&url, Some(key), &[]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::VehicleRecords.as_str(),
                        "source": "vindata",
                        "vin": vin,
                        "history": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::VehicleRecords.as_str(),
                "source": "vindata",
                "vin": vin,
                "history": [],
                "message": "Mock implementation. Configure API key to use real VINData API.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for VehicleRecordsProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::VehicleRecords
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &SearchQuery) -> ProviderResult {
        // Free-text vehicle search has no live upstream; VIN lookups are the
        // real operation for this category.
        self.mock_search(query)
    }

    async fn get_record(&self, vin: &str) -> ProviderResult {
        self.decode_vin(vin).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn demo_provider() -> VehicleRecordsProvider {
        let upstream = UpstreamClient::new(ClientConfig::unconfigured().upstream_timeout).unwrap();
        VehicleRecordsProvider::new(None, upstream)
    }

    #[tokio::test]
    async fn demo_decode_echoes_vin() {
        let provider = demo_provider();
        let result = provider.decode_vin("1HGCM82633A004352").await;
        match result {
            ProviderResult::Success(payload) => {
                assert_eq!(payload.data["vin"], "1HGCM82633A004352");
                assert!(payload.is_mock());
            }
            ProviderResult::Failure(f) => panic!("unexpected failure: {}", f.error),
        }
    }

    #[tokio::test]
    async fn get_record_is_vin_decode() {
        let provider = demo_provider();
        let decoded = provider.decode_vin("5YJ3E1EA7KF317000").await;
        let record = provider.get_record("5YJ3E1EA7KF317000").await;
        assert_eq!(decoded, record);
    }
}
