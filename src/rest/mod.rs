//! REST resource infrastructure for the Shopify Admin API.
//!
//! This module turns resource operations into HTTP calls:
//!
//! - **URL building** ([`UrlBuilder`], [`ResourcePath`]): versioned Admin URLs
//!   with `{id}` interpolation per operation
//! - **Query encoding** ([`encode_query`]): flat option records to query strings
//! - **Envelopes** ([`envelope`]): resources wrapped under their root key
//! - **Pagination** ([`PaginationStrategy`]): cursor-follow and since-id
//! - **Capability traits** ([`RestResource`], [`ListableResource`])
//! - **Models** ([`resources`]): `Shop`, `Product`, `Collect`, `Collection`,
//!   `Webhook`, `ScriptTag` and `RecurringApplicationCharge`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Product, ProductListParams, Webhook, WebhookListParams};
//! use shopify_rest::rest::{ListableResource, RestResource};
//! use shopify_rest::{RequestContext, RestClient, ShopifyConfig};
//!
//! let client = RestClient::new(ShopifyConfig::default())?;
//! let ctx = RequestContext::new("my-store", "shpat_token")?;
//!
//! // One record
//! let product = Product::find(&client, &ctx, 632910392).await?;
//!
//! // Every product, walking since-id pages
//! let params = ProductListParams { fetch_all: true, ..Default::default() };
//! let products = Product::all(&client, &ctx, params).await?;
//!
//! // Every webhook, following Link cursors
//! let ctx = ctx.with_auto_paginate(true);
//! let webhooks = Webhook::all(&client, &ctx, WebhookListParams::default()).await?;
//! ```

pub mod envelope;
mod pagination;
mod path;
mod query;
mod resource;
mod url;

pub mod resources;

pub use pagination::{
    follow_cursor, follow_since_id, page_threshold, ListParams, Page, PaginationStrategy,
    DEFAULT_PAGE_THRESHOLD,
};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use query::encode_query;
pub use resource::{ListableResource, RestResource};
pub use url::{normalize_path, origin, with_query, UrlBuilder};
