//! Wire and domain types shared by the dispatcher, the provider adapters,
//! and the HTTP surface.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker substring present in every demo-mode success payload.
///
/// Downstream consumers use this to distinguish "Demo Mode" output from real
/// upstream results; it is a visible, tested contract.
pub const MOCK_MARKER: &str = "Mock implementation";

/// The closed set of public-record categories served by the system.
///
/// Defined at process start; serialized in snake_case on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordCategory {
    CourtRecords,
    PropertyRecords,
    BusinessRegistration,
    GovernmentData,
    BackgroundCheck,
    VehicleRecords,
}

impl RecordCategory {
    /// Every category, in declaration order.
    pub const ALL: [RecordCategory; 6] = [
        RecordCategory::CourtRecords,
        RecordCategory::PropertyRecords,
        RecordCategory::BusinessRegistration,
        RecordCategory::GovernmentData,
        RecordCategory::BackgroundCheck,
        RecordCategory::VehicleRecords,
    ];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::CourtRecords => "court_records",
            RecordCategory::PropertyRecords => "property_records",
            RecordCategory::BusinessRegistration => "business_registration",
            RecordCategory::GovernmentData => "government_data",
            RecordCategory::BackgroundCheck => "background_check",
            RecordCategory::VehicleRecords => "vehicle_records",
        }
    }

    /// Parse a record-type token. Accepts the canonical snake_case names and
    /// the short aliases the original wire format used (`court`, `property`,
    /// ...), case-insensitively. Returns `None` for unknown tokens; the
    /// caller decides whether that is dropped or rejected.
    pub fn parse(token: &str) -> Option<RecordCategory> {
        match token.trim().to_ascii_lowercase().as_str() {
            "court" | "court_records" => Some(RecordCategory::CourtRecords),
            "property" | "property_records" => Some(RecordCategory::PropertyRecords),
            "business" | "business_registration" => Some(RecordCategory::BusinessRegistration),
            "government" | "government_data" => Some(RecordCategory::GovernmentData),
            "background" | "background_check" => Some(RecordCategory::BackgroundCheck),
            "vehicle" | "vehicle_records" => Some(RecordCategory::VehicleRecords),
            _ => None,
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search request as seen by the adapters: free text plus opaque filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub filters: Map<String, Value>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filters: Map::new(),
        }
    }

    pub fn with_filters(text: impl Into<String>, filters: Map<String, Value>) -> Self {
        Self {
            text: text.into(),
            filters,
        }
    }
}

/// Successful provider payload: an open JSON object plus an optional
/// `message` used to flag demo output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessPayload {
    #[serde(flatten)]
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessPayload {
    /// Build from a JSON object value, pulling `message` out of the object.
    /// Non-object values are wrapped under a `data` key.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut data) => {
                let message = match data.remove("message") {
                    Some(Value::String(s)) => Some(s),
                    Some(other) => Some(other.to_string()),
                    None => None,
                };
                Self { data, message }
            }
            other => {
                let mut data = Map::new();
                data.insert("data".to_string(), other);
                Self {
                    data,
                    message: None,
                }
            }
        }
    }

    /// True when the payload carries the demo-mode marker.
    pub fn is_mock(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|m| m.contains(MOCK_MARKER))
    }
}

/// Structured provider failure. The `error` string names the cause category
/// (`"not configured"`, `"upstream timeout"`, `"upstream error: <status>"`,
/// `"invalid response"`, `"timeout"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FailurePayload {
    pub error: String,
}

/// Outcome of one provider invocation. Exactly one of the two shapes is ever
/// present on the wire: a payload object, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderResult {
    Failure(FailurePayload),
    Success(SuccessPayload),
}

impl ProviderResult {
    /// Success from a `json!` object literal.
    pub fn success_value(value: Value) -> Self {
        ProviderResult::Success(SuccessPayload::from_value(value))
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ProviderResult::Failure(FailurePayload {
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderResult::Success(_))
    }

    /// True for a success payload flagged as demo output.
    pub fn is_mock(&self) -> bool {
        match self {
            ProviderResult::Success(payload) => payload.is_mock(),
            ProviderResult::Failure(_) => false,
        }
    }
}

/// Top-level result envelope for a search operation.
///
/// `success` reflects request acceptance only: an individual provider
/// failure lives inside `results`, never at the top level. Only an
/// input-validation problem produces `success = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub results: BTreeMap<RecordCategory, ProviderResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// An accepted request: one entry per dispatched category.
    pub fn accepted(query: String, results: BTreeMap<RecordCategory, ProviderResult>) -> Self {
        Self {
            success: true,
            query: Some(query),
            results,
            error: None,
        }
    }

    /// A rejected request (input validation failed; nothing dispatched).
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            query: None,
            results: BTreeMap::new(),
            error: Some(error.into()),
        }
    }
}
