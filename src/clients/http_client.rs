//! HTTP client for Shopify API communication.
//!
//! [`HttpClient`] executes exactly one request per call. It never retries;
//! the caller's [`CancelHandle`] and an optional deadline bound every call.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use crate::auth::CancelHandle;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{LinkSelection, ShopifyConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the shop's access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to the Shopify API.
///
/// The client holds a pooled `reqwest` client, the default headers and the
/// `Link` selection policy. It is not bound to a shop: requests carry
/// absolute URLs and their own access token.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
/// use shopify_rest::{CancelHandle, ShopifyConfig};
///
/// let client = HttpClient::new(&ShopifyConfig::default())?;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://my-store.myshopify.com/admin/api/2020-10/shop.json",
/// )
/// .access_token(token)
/// .build()?;
///
/// let response = client.request(request, &CancelHandle::new(), None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
    link_selection: LinkSelection,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from `config`.
    ///
    /// Redirects are not followed, so any 3xx status surfaces as a
    /// [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ShopifyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers.insert("content-type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            default_headers,
            timeout: config.timeout(),
            link_selection: config.link_selection(),
        })
    }

    /// Returns the default headers sent with every request, keyed by
    /// lowercased name.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the default deadline applied when a call passes none.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sends one request.
    ///
    /// `timeout` overrides the client's default deadline for this call.
    /// Cancelling `cancel` while the call is in flight drops it and returns
    /// [`HttpError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the request fails validation (`InvalidRequest`)
    /// - `cancel` is or becomes cancelled (`Cancelled`)
    /// - the deadline passes (`TimedOut`)
    /// - the connection fails (`Network`)
    /// - the status is 300 or above (`Response`, carrying the body)
    pub async fn request(
        &self,
        request: HttpRequest,
        cancel: &CancelHandle,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        if cancel.is_cancelled() {
            return Err(HttpError::Cancelled);
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(HttpError::Cancelled),
            result = Self::with_deadline(timeout.or(self.timeout), self.send(request)) => result,
        }
    }

    async fn with_deadline<F>(timeout: Option<Duration>, call: F) -> Result<HttpResponse, HttpError>
    where
        F: Future<Output = Result<HttpResponse, HttpError>>,
    {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(HttpError::TimedOut(limit))),
            None => call.await,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut headers = self.default_headers.clone();
        if let Some(token) = &request.access_token {
            headers.insert(
                ACCESS_TOKEN_HEADER.to_lowercase(),
                token.as_ref().to_string(),
            );
        }
        for (name, value) in &request.headers {
            headers.insert(name.to_lowercase(), value.clone());
        }

        let mut builder = self.client.request(request.method.into(), &request.url);
        if let Some((api_key, password)) = &request.basic_auth {
            builder = builder.basic_auth(api_key.as_ref(), Some(password.as_ref()));
        }
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        // `bytes` consumes the response, so the connection is released here
        // whether or not reading succeeds.
        let body = res.bytes().await?.to_vec();

        let response = HttpResponse::new(code, res_headers, body, self.link_selection);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.url,
                reason
            );
        }

        if code >= 300 {
            return Err(HttpError::Response(HttpResponseError {
                code,
                body: response.body_text(),
                error_reference: response.request_id().map(String::from),
            }));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
