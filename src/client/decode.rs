//! Response payload decoding.
//!
//! The API wraps list responses three ways depending on the serializer in
//! play: a bare array, an object with a `data` array, or an object with a
//! `$values` array (.NET reference-preserving serialization). One decoder
//! normalizes all of them; anything else renders as an empty list rather
//! than an error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::ClientError;

/// Normalizes a list payload into a typed vector, fail-soft.
pub fn decode_list<T: DeserializeOwned>(payload: Option<Value>) -> Vec<T> {
    let Some(value) = payload else {
        return Vec::new();
    };

    let inner = match &value {
        Value::Array(_) => value,
        Value::Object(map) => {
            if let Some(data) = map.get("data").filter(|v| v.is_array()) {
                data.clone()
            } else if let Some(values) = map.get("$values").filter(|v| v.is_array()) {
                values.clone()
            } else {
                warn!("unrecognized list payload shape; rendering empty list");
                return Vec::new();
            }
        }
        _ => {
            warn!("list payload is not an array or object; rendering empty list");
            return Vec::new();
        }
    };

    match serde_json::from_value(inner) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "list payload failed to deserialize; rendering empty list");
            Vec::new()
        }
    }
}

/// Decodes a single-record payload; unlike lists, a malformed record is an
/// error the screen surfaces.
pub fn decode_record<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, ClientError> {
    let value =
        payload.ok_or_else(|| ClientError::UnexpectedResponse("empty response body".into()))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::UnexpectedResponse(format!("malformed record: {}", e)))
}
