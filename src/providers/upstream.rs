//! Shared HTTP plumbing for live adapter paths.
//!
//! One pooled `reqwest::Client` is built at startup and cloned into every
//! adapter; clones share the underlying connection pool. The builder-level
//! timeout bounds every upstream call, so a hung provider can never stall a
//! request indefinitely.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::{SearchError, SearchResult};

/// Failure modes of a live upstream call. The `Display` strings are the
/// wire-visible failure causes recorded in a `FailurePayload`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream timeout")]
    Timeout,

    #[error("upstream error: {status}")]
    Status { status: u16 },

    #[error("invalid response")]
    InvalidResponse,

    #[error("upstream error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::InvalidResponse
        } else if let Some(status) = err.status() {
            UpstreamError::Status {
                status: status.as_u16(),
            }
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Thin wrapper over the pooled HTTP client with the error mapping every
/// live adapter path shares.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> SearchResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// GET `url` with optional bearer token and query pairs, decoded as JSON.
    pub async fn get_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        debug!(url, "upstream GET");
        let mut request = self.http.get(url).header("Accept", "application/json");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }
        response.json::<Value>().await.map_err(UpstreamError::from)
    }

    /// POST a JSON body to `url` with optional bearer token, decoded as JSON.
    pub async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        debug!(url, "upstream POST");
        let mut request = self.http.post(url).header("Accept", "application/json");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }
        response.json::<Value>().await.map_err(UpstreamError::from)
    }
}
