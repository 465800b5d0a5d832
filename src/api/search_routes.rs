//! Core search endpoints.
//!
//! ## Endpoints
//!
//! - `POST /api/search` - unified search across record types
//! - `POST /api/search/:record_type` - single-category search
//! - `GET /api/record/:record_type/:record_id` - fetch one record
//! - `GET /api/types` - supported record types
//! - `GET /api/status` - per-category configuration status
//! - `GET /api/health` - liveness probe

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::client::PublicRecordClient;
use crate::error::SearchError;
use crate::types::{ProviderResult, RecordCategory, SearchQuery, SearchResponse};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<PublicRecordClient>,
}

fn error_response(err: SearchError) -> (StatusCode, Json<SearchResponse>) {
    let status = match err {
        SearchError::InvalidInput(_) | SearchError::UnknownCategory { .. } => {
            StatusCode::BAD_REQUEST
        }
        SearchError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(SearchResponse::rejected(err.to_string())))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_record_types")]
    pub record_types: Vec<String>,
    #[serde(default)]
    pub filters: Map<String, Value>,
}

fn default_record_types() -> Vec<String> {
    vec!["all".to_string()]
}

#[derive(Debug, Deserialize)]
pub struct TypedSearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct TypedSearchResponse {
    pub success: bool,
    pub record_type: String,
    pub query: String,
    pub result: ProviderResult,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub record_type: String,
    pub record_id: String,
    pub result: ProviderResult,
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub success: bool,
    pub record_types: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub status: BTreeMap<RecordCategory, bool>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", post(search))
        .route("/api/search/:record_type", post(search_by_type))
        .route("/api/record/:record_type/:record_id", get(get_record))
        .route("/api/types", get(get_record_types))
        .route("/api/status", get(get_api_status))
        .route("/api/health", get(health_check))
        .merge(crate::api::record_routes::create_record_router())
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

// Unified search endpoint across all record types
async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<SearchResponse>)> {
    let query = SearchQuery::with_filters(body.query, body.filters);
    match state
        .client
        .dispatcher()
        .dispatch(query, &body.record_types)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(err) => Err(error_response(err)),
    }
}

// Search a specific record type
async fn search_by_type(
    Path(record_type): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<TypedSearchRequest>,
) -> Result<Json<TypedSearchResponse>, (StatusCode, Json<SearchResponse>)> {
    let query_text = body.query.clone();
    let query = SearchQuery::with_filters(body.query, body.filters);
    match state.client.search_by_type(&record_type, query).await {
        Ok(result) => Ok(Json(TypedSearchResponse {
            success: true,
            record_type,
            query: query_text,
            result,
        })),
        Err(err) => Err(error_response(err)),
    }
}

// Get a specific record by type and ID
async fn get_record(
    Path((record_type, record_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>, (StatusCode, Json<SearchResponse>)> {
    match state
        .client
        .get_record_by_type(&record_type, &record_id)
        .await
    {
        Ok(result) => Ok(Json(RecordResponse {
            success: true,
            record_type,
            record_id,
            result,
        })),
        Err(err) => Err(error_response(err)),
    }
}

// List available record types
async fn get_record_types(State(state): State<AppState>) -> Json<TypesResponse> {
    Json(TypesResponse {
        success: true,
        record_types: state.client.available_categories(),
    })
}

// Per-category configuration status
async fn get_api_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        status: state.client.api_status(),
    })
}

// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "Public Records API",
    })
}
