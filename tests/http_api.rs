//! End-to-end HTTP surface tests.
//!
//! Drives the axum router in-process with every provider in demo mode and
//! asserts the wire contract: acceptance vs. validation failure, the mock
//! marker, and structural identity between convenience routes and the
//! general search response.

#![cfg(feature = "server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use public_records::api::{create_router, AppState};
use public_records::client::PublicRecordClient;
use public_records::config::ClientConfig;
use public_records::types::{SearchResponse, MOCK_MARKER};

fn test_app() -> axum::Router {
    let client = Arc::new(PublicRecordClient::new(ClientConfig::unconfigured()).expect("client"));
    create_router(AppState { client })
}

async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn search_accepts_and_flags_demo_output() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({
            "query": "Acme Corp",
            "record_types": ["business_registration"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "Acme Corp");
    let entry = &body["results"]["business_registration"];
    assert!(entry["message"]
        .as_str()
        .expect("mock message")
        .contains(MOCK_MARKER));
}

#[tokio::test]
async fn empty_query_is_rejected_with_400() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({"query": "", "record_types": ["all"]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Please enter a search term");
}

#[tokio::test]
async fn unknown_record_types_resolve_to_empty_and_reject() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({"query": "Acme", "record_types": ["nonexistent_category"]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().expect("error").is_empty());
}

#[tokio::test]
async fn record_types_default_to_all() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({"query": "Acme"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"].as_object().expect("results map").len(),
        6,
        "every category should be searched by default"
    );
}

#[tokio::test]
async fn status_reports_unconfigured_categories() {
    let (status, body) = send(test_app(), "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let map = body["status"].as_object().expect("status map");
    assert_eq!(map.len(), 6);
    assert_eq!(map["court_records"], false);
    assert_eq!(map["vehicle_records"], false);
}

#[tokio::test]
async fn types_lists_supported_categories() {
    let (status, body) = send(test_app(), "GET", "/api/types", None).await;

    assert_eq!(status, StatusCode::OK);
    let types: Vec<&str> = body["record_types"]
        .as_array()
        .expect("types")
        .iter()
        .map(|v| v.as_str().expect("type name"))
        .collect();
    assert_eq!(
        types,
        vec![
            "court_records",
            "property_records",
            "business_registration",
            "government_data",
            "background_check",
            "vehicle_records",
        ]
    );
}

#[tokio::test]
async fn health_check_answers() {
    let (status, body) = send(test_app(), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Public Records API");
}

#[tokio::test]
async fn typed_search_matches_general_search_entry() {
    let (status, typed) = send(
        test_app(),
        "POST",
        "/api/search/vehicle",
        Some(json!({"query": "1HGCM82633A004352"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(typed["success"], true);
    assert_eq!(typed["record_type"], "vehicle");

    let (_, general) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({
            "query": "1HGCM82633A004352",
            "record_types": ["vehicle_records"],
        })),
    )
    .await;

    assert_eq!(typed["result"], general["results"]["vehicle_records"]);
}

#[tokio::test]
async fn typed_search_rejects_unknown_type() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search/astral",
        Some(json!({"query": "anything"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn vin_decode_echoes_vin_in_demo_mode() {
    let (status, body) = send(
        test_app(),
        "GET",
        "/api/vehicle/decode/1HGCM82633A004352",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["vin"], "1HGCM82633A004352");
    assert!(body["result"]["message"]
        .as_str()
        .expect("message")
        .contains(MOCK_MARKER));
}

#[tokio::test]
async fn court_case_lookup_answers() {
    let (status, body) = send(test_app(), "GET", "/api/court/case/CASE-42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["case_id"], "CASE-42");
}

#[tokio::test]
async fn property_address_lookup_answers() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/property/address",
        Some(json!({"address": "1 Main St", "city": "Springfield", "state": "IL"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["address"], "1 Main St");
}

#[tokio::test]
async fn business_enrich_answers() {
    let (status, body) = send(test_app(), "GET", "/api/business/enrich/acme.example", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["domain"], "acme.example");
}

#[tokio::test]
async fn search_response_round_trips_through_the_wire_type() {
    let (status, body) = send(
        test_app(),
        "POST",
        "/api/search",
        Some(json!({"query": "Acme", "record_types": ["all"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let parsed: SearchResponse = serde_json::from_value(body.clone()).expect("typed response");
    assert!(parsed.success);
    let reserialized = serde_json::to_value(&parsed).expect("reserialize");
    assert_eq!(
        body["results"].as_object().expect("original").len(),
        reserialized["results"].as_object().expect("round trip").len()
    );
    assert_eq!(body, reserialized);
}
