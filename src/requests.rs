// src/requests.rs
use crate::error::GeocodeError;
use crate::models::is_empty_value;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The uniform wrapper every server reply is normalized into.
///
/// A successful HTTP exchange yields the server's own `success`, `data`,
/// `error` and `message` fields (`success` defaulting to `true` when the
/// server leaves it out). A failed exchange yields `success == false`, no
/// data, the stringified fault in `error` and a generic category in `message`.
#[derive(Debug)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<Map<String, Value>>,
    pub error: Option<String>,
    pub message: Option<String>,
    // Any non-null `data`, mapping or not.
    payload_present: bool,
    fault: Option<GeocodeError>,
}

impl ApiResponse {
    /// Builds the envelope from a decoded JSON body.
    pub(crate) fn from_body(body: Value) -> Self {
        let mut body = match body {
            Value::Object(map) => map,
            // A bare scalar or array has no envelope fields at all.
            _ => Map::new(),
        };

        let success = body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        let raw_data = body.remove("data");
        let payload_present = matches!(&raw_data, Some(value) if !value.is_null());
        let data = match raw_data {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        };
        let error = body.get("error").and_then(|v| v.as_str()).map(String::from);
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from);

        ApiResponse {
            success,
            data,
            error,
            message,
            payload_present,
            fault: None,
        }
    }

    /// Builds the failed envelope for a transport or parse fault.
    pub(crate) fn from_fault(fault: GeocodeError) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(fault.to_string()),
            message: Some(fault.category().to_string()),
            payload_present: false,
            fault: Some(fault),
        }
    }

    /// True when the request never produced a usable body.
    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// True when the server answered, flagged success and sent a data payload.
    ///
    /// Any non-null `data` counts, even one that is not a mapping and so is
    /// not exposed through [`ApiResponse::data`].
    pub fn is_healthy(&self) -> bool {
        self.success && self.payload_present
    }

    /// Splits the envelope into its three outcomes: `Err` for a fault,
    /// `Ok(None)` when the server reported failure or sent no data, and
    /// `Ok(Some(data))` otherwise.
    pub(crate) fn into_payload(self) -> Result<Option<Map<String, Value>>, GeocodeError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        if !self.success {
            log::debug!(
                "Server reported failure: error={:?}, message={:?}",
                self.error,
                self.message
            );
            return Ok(None);
        }
        Ok(self.data.filter(|data| !data.is_empty()))
    }

    /// Decodes `data.<field>` as a single record. Absent or empty records are
    /// "not found"; a present record that does not match `R` is an error.
    pub(crate) fn into_record<R: DeserializeOwned>(
        self,
        field: &str,
    ) -> Result<Option<R>, GeocodeError> {
        let Some(mut data) = self.into_payload()? else {
            return Ok(None);
        };
        match data.remove(field) {
            Some(value) if !is_empty_value(&value) => decode_record(field, value).map(Some),
            _ => Ok(None),
        }
    }

    /// Decodes `data.<field>` as an ordered list of records. A missing or empty
    /// list is an empty `Vec`.
    pub(crate) fn into_records<R: DeserializeOwned>(
        self,
        field: &str,
    ) -> Result<Vec<R>, GeocodeError> {
        let Some(mut data) = self.into_payload()? else {
            return Ok(Vec::new());
        };
        match data.remove(field) {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| decode_record(&format!("{}[{}]", field, index), item))
                .collect(),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(GeocodeError::MalformedResult(format!(
                "expected '{}' to be a list, got {}",
                field, other
            ))),
        }
    }
}

fn decode_record<R: DeserializeOwned>(field: &str, value: Value) -> Result<R, GeocodeError> {
    serde_json::from_value(value).map_err(|e| {
        log::warn!("Failed to decode '{}' from response: {}", field, e);
        GeocodeError::MalformedResult(format!("{}: {}", field, e))
    })
}
