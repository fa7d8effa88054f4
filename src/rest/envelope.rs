//! JSON envelope codec.
//!
//! The Admin API wraps every payload under a root key fixed per resource:
//! `{"product": {...}}` for one record, `{"products": [...]}` for a list.
//! Error responses may carry an `errors` member instead.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::RestError;

/// Decodes the value stored under `key` in a response body.
///
/// `resource` and `url` only label the error.
///
/// # Errors
///
/// Returns [`RestError::Decoding`] if the body is not a JSON object, if
/// `key` is absent or null, or if its value does not match `T`. When the
/// body carries an `errors` member, its text is part of the message.
pub fn decode<T: DeserializeOwned>(
    body: &[u8],
    key: &str,
    resource: &'static str,
    url: &str,
) -> Result<T, RestError> {
    let mut root: Map<String, Value> = serde_json::from_slice(body)
        .map_err(|e| RestError::decoding(resource, url, format!("invalid JSON body: {e}")))?;

    match root.remove(key) {
        Some(value) if !value.is_null() => serde_json::from_value(value).map_err(|e| {
            RestError::decoding(resource, url, format!("unexpected '{key}' shape: {e}"))
        }),
        _ => {
            let detail = root
                .get("errors")
                .map(|errors| format!(" (errors: {errors})"))
                .unwrap_or_default();
            Err(RestError::decoding(
                resource,
                url,
                format!("missing '{key}' in response{detail}"),
            ))
        }
    }
}

/// Wraps `value` under `key`, as request bodies expect.
///
/// # Errors
///
/// Returns [`RestError::Encoding`] if `value` cannot be serialized.
pub fn encode<T: Serialize + ?Sized>(value: &T, key: &str) -> Result<Value, RestError> {
    let inner = serde_json::to_value(value).map_err(|e| RestError::Encoding {
        what: format!("'{key}' body"),
        message: e.to_string(),
    })?;

    let mut root = Map::new();
    root.insert(key.to_string(), inner);
    Ok(Value::Object(root))
}
