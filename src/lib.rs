//! # Shopify Admin REST Client
//!
//! An async client for the Shopify Admin REST API: typed resource models,
//! per-call request contexts, and automatic pagination.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for credentials, shop domains and hosts
//! - A [`RequestContext`] per logical operation, carrying the shop, its
//!   access token and a [`CancelHandle`]
//! - A single-attempt async HTTP transport with cancellation and deadlines
//! - Resource operations through [`rest::RestResource`] and
//!   [`rest::ListableResource`]
//! - Cursor-follow and since-id pagination
//! - OAuth authorization code exchange via [`auth::oauth`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{ApiVersion, RequestContext, RestClient, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(config).unwrap();
//!
//! let ctx = RequestContext::new("my-store", "shpat_token").unwrap();
//! assert_eq!(
//!     client.url_builder(&ctx).with_id("products", 632910392).unwrap(),
//!     "https://my-store.myshopify.com/admin/api/2020-10/products/632910392.json"
//! );
//! ```
//!
//! ## Resources
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Product, ProductListParams, Shop};
//! use shopify_rest::rest::{ListableResource, RestResource};
//!
//! let shop = Shop::current(&client, &ctx).await?;
//!
//! let params = ProductListParams {
//!     limit: Some(250),
//!     fetch_all: true,
//!     ..Default::default()
//! };
//! let products = Product::all(&client, &ctx, params).await?;
//! ```
//!
//! ## Cancellation
//!
//! ```rust,ignore
//! use shopify_rest::{CancelHandle, RequestContext};
//!
//! let cancel = CancelHandle::new();
//! let ctx = RequestContext::new("my-store", "shpat_token")?.with_cancel_handle(cancel.clone());
//!
//! let listing = tokio::spawn(async move { Product::all(&client, &ctx, params).await });
//! cancel.cancel();
//! assert!(listing.await?.unwrap_err().is_cancelled());
//! ```
//!
//! ## Errors
//!
//! Every resource operation returns [`RestError`]. [`RestError::kind`]
//! classifies it as one of the [`ErrorKind`] variants; remote failures keep
//! the status and the response body.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events and installs no
//! subscriber. Requests and pages are logged at `debug`; deprecation notices
//! and pagination anomalies at `warn`. Access tokens are never logged.
//!
//! ## Thread Safety
//!
//! [`RestClient`], [`HttpClient`], [`ShopifyConfig`] and [`RequestContext`]
//! are `Send + Sync`; one client can serve many shops concurrently.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{CancelHandle, RequestContext};
pub use config::{
    AccessToken, ApiKey, ApiPassword, ApiSecretKey, ApiVersion, HostUrl, LinkSelection,
    ShopDomain, ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, ErrorKind, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, PaginationInfo, RestClient,
    RestError,
};

// Re-export resource operations
pub use rest::resources::{
    Collect, Collection, Product, RecurringApplicationCharge, ScriptTag, Shop, Webhook,
};
pub use rest::{ListableResource, RestResource};

// Re-export OAuth types for convenience
pub use auth::oauth::{request_access_token, OAuthResponse};
