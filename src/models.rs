// src/models.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A geographical point in decimal degrees.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    /// Returns true when latitude is within [-90, 90] and longitude within [-180, 180].
    ///
    /// Decoding never checks this; results are reported exactly as the server sent them.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// A forward or reverse geocoding match.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
    #[serde(
        rename = "boundingBox",
        default,
        deserialize_with = "non_empty_bounding_box",
        skip_serializing_if = "Option::is_none"
    )]
    pub bounding_box: Option<BoundingBox>,
}

impl GeocodeResult {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// Approximate location and network metadata for an IP address.
///
/// Every descriptive field is independently optional; a field the server
/// leaves out (or sends as `null`) is `None`, never an empty string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IpLookupResult {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub asn: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
}

impl IpLookupResult {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// Service description returned by the server root (`GET /`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ApiInfo {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub endpoints: Option<HashMap<String, String>>,
    #[serde(default)]
    pub examples: Option<HashMap<String, String>>,
    #[serde(default)]
    pub clients: Option<HashMap<String, String>>,
    /// Any other keys the server includes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Any empty value (`null`, `{}`, `[]`, ...) means "no bounding box".
fn non_empty_bounding_box<'de, D>(deserializer: D) -> Result<Option<BoundingBox>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) if is_empty_value(&value) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Whether a JSON value counts as "nothing there" for payload lookups:
/// `null`, `false`, zero, `""`, `{}` and `[]`.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
    }
}
