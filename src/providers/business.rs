//! Business registration adapter (Secretary-of-State style records).

use async_trait::async_trait;
use serde_json::json;

use crate::providers::upstream::UpstreamClient;
use crate::providers::RecordProvider;
use crate::types::{ProviderResult, RecordCategory, SearchQuery};

const BUSINESS_API_BASE: &str = "https://api.business-data.gov";

pub struct BusinessRegistrationProvider {
    api_key: Option<String>,
    upstream: UpstreamClient,
}

impl BusinessRegistrationProvider {
    pub fn new(api_key: Option<String>, upstream: UpstreamClient) -> Self {
        Self { api_key, upstream }
    }

    async fn live_search(&self, key: &str, query: &SearchQuery) -> ProviderResult {
        let url = format!("{}/registrations", BUSINESS_API_BASE);
        match self
            .upstream
            .get_json(&url, Some(key), &[("name", query.text.as_str())])
            .await
        {
            Ok(body) => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BusinessRegistration.as_str(),
                "query": query.text,
                "filters": &query.filters,
                "results": body,
            })),
            Err(err) => ProviderResult::failure(err.to_string()),
        }
    }

    fn mock_search(&self, query: &SearchQuery) -> ProviderResult {
        ProviderResult::success_value(json!({
            "api_type": RecordCategory::BusinessRegistration.as_str(),
            "query": query.text,
            "filters": &query.filters,
            "results": [],
            "total": 0,
            "message": "Mock implementation. Configure API key to use real data.",
        }))
    }

    /// Enrich a company profile from its web domain.
    pub async fn enrich_company(&self, domain: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/companies/enrich", BUSINESS_API_BASE);
                match self.upstream.get_json(&url, Some(key), &[("domain", domain)]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::BusinessRegistration.as_str(),
                        "domain": domain,
                        "company": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BusinessRegistration.as_str(),
                "domain": domain,
                "company": {},
                "message": "Mock implementation. Configure API key to use real data.",
            })),
        }
    }
}

#[async_trait]
impl RecordProvider for BusinessRegistrationProvider {
    fn category(&self) -> RecordCategory {
        RecordCategory::BusinessRegistration
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

    async fn get_record(&self, business_id: &str) -> ProviderResult {
        match self.api_key.as_deref() {
            Some(key) => {
                let url = format!("{}/registrations/{}", BUSINESS_API_BASE, business_id);
                match self.upstream.get_json(&url, Some(key), &[]).await {
                    Ok(body) => ProviderResult::success_value(json!({
                        "api_type": RecordCategory::BusinessRegistration.as_str(),
                        "business_id": business_id,
                        "details": body,
                    })),
                    Err(err) => ProviderResult::failure(err.to_string()),
                }
            }
            None => ProviderResult::success_value(json!({
                "api_type": RecordCategory::BusinessRegistration.as_str(),
                "business_id": business_id,
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
    async fn demo_search_echoes_query() {
        let upstream = UpstreamClient::new(ClientConfig::unconfigured().upstream_timeout).unwrap();
        let provider = BusinessRegistrationProvider::new(None, upstream);

        let result = provider.search(&SearchQuery::new("Acme Corp")).await;
        match result {
            ProviderResult::Success(payload) => {
                assert_eq!(payload.data["query"], "Acme Corp");
                assert!(payload.is_mock());
            }
            ProviderResult::Failure(f) => panic!("unexpected failure: {}", f.error),
        }
    }
}
