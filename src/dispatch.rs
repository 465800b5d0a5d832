//! Search dispatcher: fans a query out across the requested categories and
//! merges per-category outcomes into one envelope.
//!
//! Categories run concurrently (one task each, so in-flight work is bounded
//! by the resolved-set size); adapters within a category run sequentially in
//! registry order so the first-success-wins merge stays deterministic.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{SearchError, SearchResult};
use crate::providers::RecordProvider;
use crate::registry::CategoryRegistry;
use crate::types::{ProviderResult, RecordCategory, SearchQuery, SearchResponse};

/// Token that expands to every registered category.
pub const ALL_CATEGORIES: &str = "all";

pub struct SearchDispatcher {
    registry: Arc<CategoryRegistry>,
    /// Per-category deadline; work still pending when it elapses is recorded
    /// as a `timeout` failure and the partial response is returned.
    deadline: Duration,
}

impl SearchDispatcher {
    pub fn new(registry: Arc<CategoryRegistry>, deadline: Duration) -> Self {
        Self { registry, deadline }
    }

    /// Dispatch `query` to every category named in `requested`.
    ///
    /// Validation failures (empty query text, empty resolved set) return
    /// `Err` before any provider is invoked. Once validation passes the
    /// response is `success = true` regardless of individual provider
    /// outcomes; those are reported inside `results`.
    pub async fn dispatch(
        &self,
        query: SearchQuery,
        requested: &[String],
    ) -> SearchResult<SearchResponse> {
        let text = query.text.trim();
        if text.is_empty() {
            return Err(SearchError::InvalidInput(
                "Please enter a search term".to_string(),
            ));
        }

        let resolved = self.resolve(requested);
        if resolved.is_empty() {
            return Err(SearchError::InvalidInput(
                "No valid record types requested".to_string(),
            ));
        }

        let query = SearchQuery {
            text: text.to_string(),
            filters: query.filters,
        };
        Ok(self.run(query, resolved).await)
    }

    /// Resolve requested tokens against the registry. The `"all"` token
    /// expands to the full registered set; unknown tokens and categories
    /// this registry does not serve are dropped (lenient policy).
    fn resolve(&self, requested: &[String]) -> Vec<RecordCategory> {
        let mut resolved: Vec<RecordCategory> = Vec::new();
        for token in requested {
            if token.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
                for category in self.registry.list_categories() {
                    if !resolved.contains(&category) {
                        resolved.push(category);
                    }
                }
            } else if let Some(category) = RecordCategory::parse(token) {
                if self.registry.adapters_for(category).is_empty() {
                    debug!(%category, "category not served by this registry, dropping");
                } else if !resolved.contains(&category) {
                    resolved.push(category);
                }
            } else {
                debug!(token, "dropping unknown record type");
            }
        }
        resolved
    }

    async fn run(
        &self,
        query: SearchQuery,
        resolved: Vec<RecordCategory>,
    ) -> SearchResponse {
        let query = Arc::new(query);
        let mut tasks = JoinSet::new();

        for &category in &resolved {
            let adapters = self.registry.adapters_for(category).to_vec();
            let query = Arc::clone(&query);
            let deadline = self.deadline;
            tasks.spawn(async move {
                let outcome =
                    match tokio::time::timeout(deadline, run_category(adapters, &query)).await {
                        Ok(result) => result,
                        Err(_) => {
                            warn!(%category, "category search exceeded deadline");
                            ProviderResult::failure("timeout")
                        }
                    };
                (category, outcome)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((category, outcome)) => {
                    results.insert(category, outcome);
                }
                Err(err) => {
                    // A panicking adapter aborts its task before it can
                    // report a category; the fill loop below records it.
                    warn!("category task failed: {err}");
                }
            }
        }
        for category in resolved {
            results
                .entry(category)
                .or_insert_with(|| ProviderResult::failure("provider panicked"));
        }

        SearchResponse::accepted(query.text.clone(), results)
    }
}

/// Invoke the category's adapters in declaration order. The first success
/// wins; if every adapter fails, the last failure is reported.
async fn run_category(
    adapters: Vec<Arc<dyn RecordProvider>>,
    query: &SearchQuery,
) -> ProviderResult {
    let mut last_failure = ProviderResult::failure("no provider available");
    for adapter in adapters {
        match adapter.search(query).await {
            result @ ProviderResult::Success(_) => return result,
            failure => last_failure = failure,
        }
    }
    last_failure
}
