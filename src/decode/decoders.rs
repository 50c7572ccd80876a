//! Decoder implementations

use super::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::JsonValue;

/// JSON decoder with record path extraction
///
/// The record path points at the array of records inside the response body,
/// e.g. `$.employees[*]` for the employees stream. A trailing `[*]` selects
/// every element of the named array; the container itself must be present
/// and be an array, otherwise the response is considered malformed. Paths
/// with wildcards elsewhere fall back to a full JSONPath query.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// JSONPath to the record array
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a decoder that treats the whole response as records
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Extract records from a parsed response body
    fn extract_records(&self, value: &JsonValue) -> Result<Vec<JsonValue>> {
        let Some(path) = &self.record_path else {
            // No path - treat entire response as records
            return match value {
                JsonValue::Array(arr) => Ok(arr.clone()),
                _ => Ok(vec![value.clone()]),
            };
        };

        if let Some(container_path) = path.strip_suffix("[*]") {
            return extract_record_array(value, path, container_path);
        }

        if path.contains('*') {
            return extract_with_jsonpath(value, path);
        }

        match extract_simple_path(value, path) {
            Some(JsonValue::Array(arr)) => Ok(arr),
            Some(v) => Ok(vec![v]),
            None => Err(Error::record_extraction(
                path.clone(),
                "path not present in response",
            )),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>> {
        let value: JsonValue = serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })?;
        self.extract_records(&value)
    }

    fn decode_raw(&self, body: &str) -> Result<JsonValue> {
        serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })
    }
}

/// Extract the record array named by `container_path`.
///
/// The container must exist and be an array. An empty array is a valid
/// (terminal) page; a missing or non-array container means the response does
/// not match the API contract.
fn extract_record_array(
    value: &JsonValue,
    full_path: &str,
    container_path: &str,
) -> Result<Vec<JsonValue>> {
    match extract_simple_path(value, container_path) {
        Some(JsonValue::Array(arr)) => Ok(arr),
        Some(_) => Err(Error::record_extraction(
            full_path,
            "record container is not an array",
        )),
        None => Err(Error::record_extraction(
            full_path,
            "record container not present in response",
        )),
    }
}

/// Extract a value using a simple dot-notation path
fn extract_simple_path(value: &JsonValue, path: &str) -> Option<JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }

    Some(current.clone())
}

/// Extract records using a full JSONPath query
fn extract_with_jsonpath(value: &JsonValue, path: &str) -> Result<Vec<JsonValue>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    match jp.find(value) {
        JsonValue::Array(arr) => Ok(arr),
        JsonValue::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
