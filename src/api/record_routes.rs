//! Category-specific convenience endpoints.
//!
//! Thin single-category invocations of the same adapter contract; each
//! result is structurally identical to the corresponding entry of a general
//! `/api/search` response.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::search_routes::AppState;
use crate::providers::RecordProvider;
use crate::types::ProviderResult;

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub success: bool,
    pub result: ProviderResult,
}

impl ResultResponse {
    fn of(result: ProviderResult) -> Json<Self> {
        Json(Self {
            success: true,
            result,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct ValuationRequest {
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

pub fn create_record_router() -> Router<AppState> {
    Router::new()
        // Court records
        .route("/api/court/case/:case_id", get(get_court_case))
        .route("/api/court/documents/:case_id", get(get_case_documents))
        // Property records
        .route("/api/property/address", post(search_property_by_address))
        .route("/api/property/valuation", post(get_property_valuation))
        // Business records
        .route("/api/business/enrich/:domain", get(enrich_company))
        // Vehicle records
        .route("/api/vehicle/decode/:vin", get(decode_vin))
        .route("/api/vehicle/history/:vin", get(get_vehicle_history))
}

async fn get_court_case(
    Path(case_id): Path<String>,
    State(state): State<AppState>,
) -> Json<ResultResponse> {
    ResultResponse::of(state.client.court().get_record(&case_id).await)
}

async fn get_case_documents(
    Path(case_id): Path<String>,
    State(state): State<AppState>,
) -> Json<ResultResponse> {
    ResultResponse::of(state.client.court().get_case_documents(&case_id).await)
}

async fn search_property_by_address(
    State(state): State<AppState>,
    Json(body): Json<AddressRequest>,
) -> Json<ResultResponse> {
    ResultResponse::of(
        state
            .client
            .property()
            .get_by_address(&body.address, &body.city, &body.state)
            .await,
    )
}

async fn get_property_valuation(
    State(state): State<AppState>,
    Json(body): Json<ValuationRequest>,
) -> Json<ResultResponse> {
    ResultResponse::of(
        state
            .client
            .property()
            .get_valuation(&body.address, body.filters)
            .await,
    )
}

async fn enrich_company(
    Path(domain): Path<String>,
    State(state): State<AppState>,
) -> Json<ResultResponse> {
    ResultResponse::of(state.client.business().enrich_company(&domain).await)
}

async fn decode_vin(
    Path(vin): Path<String>,
    State(state): State<AppState>,
) -> Json<ResultResponse> {
    ResultResponse::of(state.client.vehicle().decode_vin(&vin).await)
}

async fn get_vehicle_history(
    Path(vin): Path<String>,
    State(state): State<AppState>,
) -> Json<ResultResponse> {
    ResultResponse::of(state.client.vehicle().get_vehicle_history(&vin).await)
}
