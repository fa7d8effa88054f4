//! REST client implementation for the Shopify Admin API.

use std::time::Duration;

use crate::auth::RequestContext;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};
use crate::rest::UrlBuilder;

/// REST API client for the Shopify Admin API.
///
/// A `RestClient` is not bound to a shop. Each call takes a
/// [`RequestContext`] that supplies the shop, its access token, the
/// cancellation handle and an optional timeout, so one client can serve many
/// shops concurrently.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{RequestContext, RestClient, ShopifyConfig};
///
/// let client = RestClient::new(ShopifyConfig::default())?;
/// let ctx = RequestContext::new("my-store", "shpat_token")?;
///
/// let url = client.url_builder(&ctx).simple("products")?;
/// let response = client.get(&ctx, "Product", &url).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    config: ShopifyConfig,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: ShopifyConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Creates a new REST client that targets `version` instead of the
    /// configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn with_version(config: ShopifyConfig, version: ApiVersion) -> Result<Self, HttpError> {
        if &version == config.api_version() {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        Self::new(config.with_api_version(version))
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Returns the API version used in request URLs.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.config.api_version()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a URL builder for the context's shop.
    #[must_use]
    pub fn url_builder(&self, ctx: &RequestContext) -> UrlBuilder {
        UrlBuilder::new(
            ctx.shop(),
            self.config.api_version(),
            self.config.api_host(),
        )
    }

    /// Sends an authenticated GET request to `url`.
    ///
    /// `resource` labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for any transport, cancellation or remote
    /// failure.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        resource: &'static str,
        url: &str,
    ) -> Result<HttpResponse, RestError> {
        self.send(ctx, resource, HttpMethod::Get, url, None).await
    }

    /// Sends an authenticated POST request with a JSON body to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for any transport, cancellation or remote
    /// failure.
    pub async fn post(
        &self,
        ctx: &RequestContext,
        resource: &'static str,
        url: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.send(ctx, resource, HttpMethod::Post, url, Some(body))
            .await
    }

    /// Sends an authenticated DELETE request to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for any transport, cancellation or remote
    /// failure.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        resource: &'static str,
        url: &str,
    ) -> Result<HttpResponse, RestError> {
        self.send(ctx, resource, HttpMethod::Delete, url, None)
            .await
    }

    async fn send(
        &self,
        ctx: &RequestContext,
        resource: &'static str,
        method: HttpMethod,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(method, url)
            .access_token(ctx.access_token().clone());
        if let Some((api_key, password)) = ctx.private_app_credentials() {
            builder = builder.basic_auth(api_key.clone(), password.clone());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder
            .build()
            .map_err(|e| RestError::http(resource, url, e.into()))?;

        self.http_client
            .request(request, ctx.cancel_handle(), self.timeout_for(ctx))
            .await
            .map_err(|e| RestError::http(resource, url, e))
    }

    fn timeout_for(&self, ctx: &RequestContext) -> Option<Duration> {
        ctx.timeout().or_else(|| self.config.timeout())
    }
}
