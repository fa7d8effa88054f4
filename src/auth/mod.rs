//! Authentication types for the Shopify Admin REST API.
//!
//! # Overview
//!
//! - [`RequestContext`]: shop, access token, cancellation handle and
//!   per-call options for one logical operation
//! - [`CancelHandle`]: a shared signal that aborts in-flight calls
//! - [`oauth`]: exchange of an authorization code for an access token
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_rest::{CancelHandle, RequestContext};
//!
//! let cancel = CancelHandle::new();
//! let ctx = RequestContext::new("my-store", "shpat_token")
//!     .unwrap()
//!     .with_cancel_handle(cancel.clone())
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(ctx.shop().as_ref(), "my-store.myshopify.com");
//! assert!(!ctx.is_cancelled());
//! ```

mod context;
pub mod oauth;

pub use context::{CancelHandle, RequestContext};
pub use oauth::{request_access_token, OAuthResponse};
