//! Background-check adapter (Checkr-style screening APIs).

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const CHECKR_API_BASE: &str = "https://api.checkr.com/v1";

pub struct BackgroundCheckProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl BackgroundCheckProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    async fn live_search(&self, key: &str, query: &SearchQuery) -> ProviderResult {
        let url = format!("{}/candidates", CHECKR_API_BASE);
        match self
            .upstream
            .get_json(&url, Some(key), &[("q", query.text.as_str())])
            .await
        {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BackgroundCheck.as_str(),
                "query": query.text,
                "filters": &query.filters,
                "source": "checkr",
                "results": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::BackgroundCheck.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    /// Criminal-record search for a named subject.
    pub async fn search_criminal_records(
        &self,
        name: &str,
        filters: Map<String, Value>,
    ) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/reports", CHECKR_API_BASE);
                match self.upstream.get_json(&url, Some(key), &[("name", name)]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::BackgroundCheck.as_str(),
                        "name": name,
                        "filters": filters,
                        "source": "checkr",
                        "records": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BackgroundCheck.as_str(),
                "name": name,
                "filters": filters,
                "records": [],
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for BackgroundCheckProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::BackgroundCheck
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

    async fn get_record(&self, record_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/reports/{}", CHECKR_API_BASE, record_id);
                match self.upstream.get_json(&url, Some(key), &[]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::BackgroundCheck.as_str(),
                        "record_id": record_id,
                        "details": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BackgroundCheck.as_str(),
                "record_id": record_id,
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
    async fn demo_criminal_search_is_mock() {
        let upstream = UpstreamClient::new(ClientConfig::unconfigured().upstream_timeout).unwrap();
        let provider = BackgroundCheckProvider::new(None, upstream);

        let result = provider
            .search_criminal_records("Jane Doe", Map::new())
            .await;
        assert!(result.is_mock());
    }
}
