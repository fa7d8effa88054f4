//! HTTP client types for Shopify API communication.
//!
//! This module provides the transport layer and the REST facade built on it.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client; one call, no retries
//! - [`HttpRequest`]: a request addressed by an absolute URL
//! - [`HttpResponse`]: status, headers, raw body and the next-page cursor
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RestClient`]: the Admin REST facade used by resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RequestContext, RestClient, ShopifyConfig};
//!
//! let client = RestClient::new(ShopifyConfig::default())?;
//! let ctx = RequestContext::new("my-store", "shpat_token")?;
//!
//! let url = client.url_builder(&ctx).simple("shop")?;
//! let response = client.get(&ctx, "Shop", &url).await?;
//! ```
//!
//! # Cancellation
//!
//! Every call takes the caller's [`CancelHandle`](crate::CancelHandle). A
//! cancelled handle fails the call before any network I/O; cancelling during
//! the call drops the in-flight request.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{extract_first_link_url, ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{ErrorKind, RestClient, RestError};
