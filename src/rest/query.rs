//! Query string encoding for list and filter options.
//!
//! Option records are plain serde structs. [`encode_query`] flattens one into
//! a URL-encoded query string:
//!
//! - `None`, empty strings and empty arrays are omitted
//! - arrays of scalars are comma-joined (`ids=1,2,3`)
//! - booleans and numbers use their JSON text
//! - keys come out in sorted order
//!
//! Fields that steer the client rather than the server (such as `fetch_all`)
//! are marked `#[serde(skip)]` on the option record and never appear.

use serde::Serialize;
use serde_json::Value;

use crate::clients::RestError;

/// Encodes a flat options record as a query string.
///
/// # Errors
///
/// Returns [`RestError::Encoding`] if the record does not serialize to a
/// JSON object, or if any field holds a nested object or an array with
/// non-scalar elements.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shopify_rest::rest::encode_query;
///
/// #[derive(Serialize)]
/// struct Options {
///     limit: Option<u32>,
///     ids: Vec<u64>,
///     title: Option<String>,
/// }
///
/// let query = encode_query(&Options {
///     limit: Some(3),
///     ids: vec![1, 2],
///     title: None,
/// })
/// .unwrap();
///
/// assert_eq!(query, "ids=1,2&limit=3");
/// ```
pub fn encode_query<T: Serialize + ?Sized>(options: &T) -> Result<String, RestError> {
    let value = serde_json::to_value(options).map_err(|e| encoding_error(e.to_string()))?;

    let map = match value {
        Value::Null => return Ok(String::new()),
        Value::Object(map) => map,
        other => {
            return Err(encoding_error(format!(
                "expected a record of options, got {other}"
            )))
        }
    };

    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        if let Some(encoded) = encode_value(key, value)? {
            pairs.push(format!("{}={encoded}", urlencoding::encode(key)));
        }
    }

    Ok(pairs.join("&"))
}

fn encode_value(key: &str, value: &Value) -> Result<Option<String>, RestError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| {
                    scalar(item).ok_or_else(|| {
                        encoding_error(format!("field '{key}' holds a nested value"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(encoding_error(format!(
            "field '{key}' is a nested object"
        ))),
        scalar_value => Ok(scalar(scalar_value)),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(urlencoding::encode(s).into_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn encoding_error(message: String) -> RestError {
    RestError::Encoding {
        what: "query options".to_string(),
        message,
    }
}
