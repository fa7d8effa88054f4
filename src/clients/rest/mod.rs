//! REST API client for the Shopify Admin API.
//!
//! [`RestClient`] sits on top of [`HttpClient`](crate::clients::HttpClient)
//! and turns a [`RequestContext`](crate::RequestContext) into authenticated
//! calls. Resource operations in [`crate::rest`] are built on it.
//!
//! - [`RestClient`]: `get()`, `post()`, `delete()` against absolute URLs
//! - [`RestError`]: error type of every resource operation
//! - [`ErrorKind`]: coarse classification of a [`RestError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RequestContext, RestClient, ShopifyConfig};
//!
//! let client = RestClient::new(ShopifyConfig::default())?;
//! let ctx = RequestContext::new("my-store", "shpat_token")?;
//!
//! let url = client.url_builder(&ctx).with_id("products", 632910392)?;
//! let response = client.get(&ctx, "Product", &url).await?;
//! println!("{}", response.body_text());
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::{ErrorKind, RestError};
