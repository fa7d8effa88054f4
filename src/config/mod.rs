//! Client configuration.
//!
//! [`ShopifyConfig`] holds the settings shared by every request a client
//! makes: the API version, an optional host override, the user agent prefix,
//! a default timeout, the `Link` header policy and, for OAuth, the app
//! credentials. Per-shop values (shop domain and access token) live on
//! [`RequestContext`](crate::auth::RequestContext) instead.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_rest::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2020_07)
//!     .timeout(Duration::from_secs(30))
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2020_07);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiPassword, ApiSecretKey, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Which entry of a `Link` response header is treated as the next page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkSelection {
    /// Follow the entry whose `rel` is `next`.
    #[default]
    RelNext,
    /// Follow the first entry whatever its `rel`.
    FirstEntry,
}

/// Configuration shared by all requests of a client.
///
/// `ShopifyConfig` is `Clone`, `Send` and `Sync`. The default targets
/// [`ApiVersion::latest`] with no overrides.
#[derive(Clone, Debug, Default)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    link_selection: LinkSelection,
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns a copy of this configuration targeting `version`.
    #[must_use]
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Returns the host override, if configured.
    ///
    /// When set, requests go to this host's origin instead of
    /// `https://{shop}`.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns how the next page is picked out of a `Link` header.
    #[must_use]
    pub const fn link_selection(&self) -> LinkSelection {
        self.link_selection
    }

    /// Returns the app's API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the app's API secret key, if configured.
    #[must_use]
    pub const fn api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.api_secret_key.as_ref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no deadline beyond the caller's cancellation)
/// - `link_selection`: [`LinkSelection::RelNext`]
/// - `api_key` / `api_secret_key`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    link_selection: Option<LinkSelection>,
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of the shop's own domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default timeout applied to each HTTP call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how the next page is picked out of a `Link` header.
    #[must_use]
    pub const fn link_selection(mut self, selection: LinkSelection) -> Self {
        self.link_selection = Some(selection);
        self
    }

    /// Sets the app's API key (OAuth `client_id`).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the app's API secret key (OAuth `client_secret`).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(ShopifyConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            link_selection: self.link_selection.unwrap_or_default(),
            api_key: self.api_key,
            api_secret_key: self.api_secret_key,
        })
    }
}
