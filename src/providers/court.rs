//! Court records adapter.
//!
//! Live path targets the UniCourt case-search API; the CourtListener REST
//! base is kept for the document fetches that UniCourt does not cover.

use async_trait::async_trait;
use serde_json::json;

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const UNICOURT_API_BASE: &str = "https://api.unicourt.com";
const COURTLISTENER_API_BASE: &str = "https://www.courtlistener.com/api/rest/v3";

pub struct CourtRecordsProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl CourtRecordsProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    async fn live_search(&self, key: &str, query: &SearchQuery) -> ProviderResult {
        let url = format!("{}/caseSearchResults", UNICOURT_API_BASE);
        match self
            .upstream
            .get_json(&url, Some(key), &[("q", query.text.as_str())])
            .await
        {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::CourtRecords.as_str(),
                "query": query.text,
                "filters": &query.filters,
                "source": "unicourt",
                "results": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::CourtRecords.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    async fn live_record(&self, key: &str, case_id: &str) -> ProviderResult {
        let url = format!("{}/caseDetails/{}", UNICOURT_API_BASE, case_id);
        match self.upstream.get_json(&url, Some(key), &[]).await {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::CourtRecords.as_str(),
                "case_id": case_id,
                "source": "unicourt",
                "details": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_record(&self, case_id: &str) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::CourtRecords.as_str(),
            "case_id": case_id,
            "details": {},
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    /// Documents filed on a case.
    pub async fn get_case_documents(&self, case_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/recap-documents/", COURTLISTENER_API_BASE);
                match self
                    .upstream
                    .get_json(&url, Some(key), &[("docket__id", case_id)])
                    .await
                {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::CourtRecords.as_str(),
                        "case_id": case_id,
                        "source": "courtlistener",
                        "documents": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::CourtRecords.as_str(),
                "case_id": case_id,
                "documents": [],
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for CourtRecordsProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::CourtRecords
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

    async fn get_record(&self, case_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => self.live_record(key, case_id).await,
            None => self.mock_record(case_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn demo_provider() -> CourtRecordsProvider {
        let upstream = UpstreamClient::new(ClientConfig::unconfigured().upstream_timeout).unwrap();
        CourtRecordsProvider::new(None, upstream)
    }

    #[tokio::test]
    async fn demo_search_carries_mock_marker() {
        let provider = demo_provider();
        assert!(!provider.is_configured());

        let result = provider.search(&SearchQuery::new("Smith v. Jones")).await;
        assert!(result.is_mock());
    }

    #[tokio::test]
    async fn demo_documents_echo_case_id() {
        let provider = demo_provider();
        let result = provider.get_case_documents("CASE-42").await;
        match result {
            ProviderResult::Success(payload) => {
                assert_eq!(payload.data["case_id"], "CASE-42");
                assert!(payload.is_mock());
            }
            ProviderResult::Failure(f) => panic!("unexpected failure: {}", f.error),
        }
    }
}
