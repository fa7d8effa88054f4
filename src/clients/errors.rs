//! HTTP transport errors.
//!
//! - [`HttpResponseError`]: the server answered with a status of 300 or above
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: every way a single HTTP call can fail
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpError;
//!
//! match http_client.request(request, &cancel, None).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.body),
//!     Err(HttpError::Cancelled) => println!("cancelled"),
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

/// A response whose status code is 300 or greater.
///
/// The body is kept verbatim as diagnostic text.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"errors":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.to_string().contains("Not Found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("received {code} response: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body as text.
    pub body: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Parses the `errors` member of a JSON error body into field messages.
    ///
    /// Shopify reports errors in three shapes:
    ///
    /// ```json
    /// {"errors": {"title": ["can't be blank"]}}
    /// {"errors": ["Title can't be blank"]}
    /// {"errors": "Not Found"}
    /// ```
    ///
    /// The array and string forms are filed under `"base"`. A body that is
    /// not JSON, or has no `errors` member, yields an empty map.
    #[must_use]
    pub fn field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut result = HashMap::new();

        let Ok(body) = serde_json::from_str::<serde_json::Value>(&self.body) else {
            return result;
        };

        match body.get("errors") {
            Some(serde_json::Value::Object(map)) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            Some(serde_json::Value::Array(arr)) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            Some(serde_json::Value::String(s)) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }

        result
    }
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request URL is empty or not absolute.
    #[error("Invalid request URL '{url}'. Requests need an absolute http(s) URL.")]
    InvalidUrl {
        /// The URL that was rejected.
        url: String,
    },
}

/// Every way a single HTTP call can fail.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a status of 300 or above.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation handle fired.
    #[error("Request cancelled")]
    Cancelled,

    /// The call did not finish within its deadline.
    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
