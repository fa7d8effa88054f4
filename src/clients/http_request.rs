//! HTTP request types.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::{AccessToken, ApiKey, ApiPassword};

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Reads a record or a page of records.
    Get,
    /// Creates a record or triggers an action such as `activate`.
    Post,
    /// Replaces fields of a record.
    Put,
    /// Removes a record.
    Delete,
}

impl HttpMethod {
    /// Returns the method token as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns whether requests with this method must carry a JSON body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single request to send, addressed by an absolute URL.
///
/// The body is always sent as `application/json`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Post,
///     "https://my-store.myshopify.com/admin/api/2020-10/webhooks.json",
/// )
/// .body(json!({"webhook": {"topic": "app/uninstalled"}}))
/// .build()
/// .unwrap();
///
/// assert_eq!(request.method, HttpMethod::Post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Request method.
    pub method: HttpMethod,
    /// The absolute URL, query string included.
    pub url: String,
    /// JSON body; required for POST and PUT.
    pub body: Option<serde_json::Value>,
    /// Token sent as `X-Shopify-Access-Token`, if any.
    pub access_token: Option<AccessToken>,
    /// Private-app credentials sent as `Authorization: Basic`, if any.
    pub basic_auth: Option<(ApiKey, ApiPassword)>,
    /// Headers applied in order after the defaults. A later entry replaces
    /// any earlier header of the same name, compared case-insensitively.
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Starts a request for `method` and `url`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                method,
                url: url.into(),
                body: None,
                access_token: None,
                basic_auth: None,
                headers: Vec::new(),
            },
        }
    }

    /// Checks that the request can be sent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidUrl`] unless the URL is
    /// absolute `http` or `https`, and [`InvalidHttpRequestError::MissingBody`]
    /// for a POST or PUT without a body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let absolute = ["https://", "http://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme));
        if !absolute {
            return Err(InvalidHttpRequestError::InvalidUrl {
                url: self.url.clone(),
            });
        }

        if self.method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder returned by [`HttpRequest::builder`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Authenticates the request with `token`.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.request.access_token = Some(token);
        self
    }

    /// Authenticates the request as a private app.
    #[must_use]
    pub fn basic_auth(mut self, api_key: ApiKey, password: ApiPassword) -> Self {
        self.request.basic_auth = Some((api_key, password));
        self
    }

    /// Appends a header that overrides any default of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push((name.into(), value.into()));
        self
    }

    /// Validates and returns the request.
    ///
    /// # Errors
    ///
    /// See [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://my-store.myshopify.com/admin/api/2020-10/shop.json";

    #[test]
    fn test_get_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.access_token.is_none());
        assert!(request.basic_auth.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_post_and_put_need_a_body() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, URL).build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { method: ref m }) if m == method.as_str()
            ));
        }
        let delete = HttpRequest::builder(HttpMethod::Delete, URL).build();
        assert!(delete.is_ok());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        for url in ["shop.json", "", "ftp://my-store.myshopify.com/shop.json"] {
            assert!(matches!(
                HttpRequest::builder(HttpMethod::Get, url).build(),
                Err(InvalidHttpRequestError::InvalidUrl { .. })
            ));
        }
    }

    #[test]
    fn test_headers_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Put, URL)
            .body(json!({"shop": {}}))
            .header("X-One", "1")
            .header("x-one", "2")
            .build()
            .unwrap();

        assert_eq!(
            request.headers,
            vec![
                ("X-One".to_string(), "1".to_string()),
                ("x-one".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }
}
