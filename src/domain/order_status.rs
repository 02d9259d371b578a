//! Order status classification from raw portal payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Internal order status derived from a portal lookup. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is still active on the portal.
    Pending,
    /// Order carries a status code outside the active allow-list.
    Cancelled,
    /// Neither the primary nor the cancelled-order lookup knew the order.
    NotFound,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::NotFound => "NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}

/// Raw portal status codes that still count as an active order.
///
/// Opaque literal set from the portal; the mix of numeric strings and letters
/// has no documented meaning and must not be normalized. Matching is exact
/// and case-sensitive.
pub const ACTIVE_STATUS_CODES: &[&str] = &[
    "41", "73", "118", "23", "24", "22", "38", "19", "51", "84", "40", "12", "Z", "14", "11",
    "75", "44", "10", "37", "36", "I",
];

/// Unordered key/value payload returned by the portal for a tracking number.
///
/// An empty payload signals "not found under this lookup".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawOrderData(HashMap<String, Value>);

impl RawOrderData {
    /// Creates an empty payload ("order not found here").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a payload from raw fields.
    pub fn from_fields(fields: HashMap<String, Value>) -> Self {
        Self(fields)
    }

    /// Convenience constructor for a payload carrying only a status code.
    pub fn with_status(status: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert("status".to_string(), Value::String(status.into()));
        Self(fields)
    }

    /// True when the portal returned no data for the tracking number.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the `status` field rendered as a string.
    ///
    /// The portal is inconsistent about sending `"41"` versus `41`, so both
    /// render to the same code here.
    pub fn status_code(&self) -> Option<String> {
        self.0.get("status").map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Classifies a non-empty portal payload against the active allow-list.
///
/// A payload without a `status` field (or with a status outside the
/// allow-list) classifies as cancelled. Empty payloads are the caller's
/// concern; they mean "not found", not "cancelled".
pub fn classify(data: &RawOrderData) -> OrderStatus {
    match data.status_code() {
        Some(code) if ACTIVE_STATUS_CODES.contains(&code.as_str()) => OrderStatus::Pending,
        _ => OrderStatus::Cancelled,
    }
}
