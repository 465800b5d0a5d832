//! Government open-data adapter (data.gov catalog).

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const DATA_GOV_API_BASE: &str = "https://api.data.gov";
const CKAN_API_BASE: &str = "https://catalog.data.gov/api/3/action";

pub struct GovernmentDataProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl GovernmentDataProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    async fn live_search(&self, key: &str, query: &SearchQuery) -> ProviderResult {
        // data.gov catalog search goes through the CKAN action API; the
        // api.data.gov key is still attached for rate-limit accounting.
        let url = format!("{}/package_search", CKAN_API_BASE);
        match self
            .upstream
            .get_json(&url, Some(key), &[("q", query.text.as_str())])
            .await
        {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::GovernmentData.as_str(),
                "query": query.text,
                "filters": &query.filters,
                "source": "data_gov",
                "results": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::GovernmentData.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    /// Rows from a specific dataset.
    pub async fn get_dataset_data(
        &self,
        dataset_id: &str,
        filters: Map<String, Value>,
    ) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/datasets/{}", DATA_GOV_API_BASE, dataset_id);
                match self.upstream.get_json(&url, Some(key), &[]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::GovernmentData.as_str(),
                        "dataset_id": dataset_id,
                        "filters": filters,
                        "data": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::GovernmentData.as_str(),
                "dataset_id": dataset_id,
                "filters": filters,
                "data": [],
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for GovernmentDataProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::GovernmentData
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

    async fn get_record(&self, dataset_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/package_show", CKAN_API_BASE);
                match self.upstream.get_json(&url, Some(key), &[("id", dataset_id)]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::GovernmentData.as_str(),
                        "dataset_id": dataset_id,
                        "details": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::GovernmentData.as_str(),
                "dataset_id": dataset_id,
                "details": {},
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}
