//! Configuration and validation errors.
//!
//! Every constructor that validates input returns `Result<T, ConfigError>`,
//! so malformed shop domains, empty tokens and similar mistakes are reported
//! before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building configuration or request contexts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The app API key was blank.
    #[error("API key cannot be empty. The OAuth exchange sends it as client_id.")]
    EmptyApiKey,

    /// The app API secret was blank.
    #[error("API secret key cannot be empty. The OAuth exchange sends it as client_secret.")]
    EmptyApiSecretKey,

    /// No shop domain was given.
    #[error("Shop domain cannot be empty. Every request needs the shop it is addressed to.")]
    EmptyShopDomain,

    /// No access token was given.
    #[error("Access token cannot be empty. Authenticated requests need the shop's access token.")]
    EmptyAccessToken,

    /// A private-app password was blank.
    #[error("API password cannot be empty. Private-app requests authenticate with the API key and password.")]
    EmptyApiPassword,

    /// The shop domain is not a host name with an optional port.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop.example.com' or 'host:port'.")]
    InvalidShopDomain {
        /// The rejected domain.
        domain: String,
    },

    /// The version string is not `YYYY-MM` or `unstable`.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2020-10') or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// An operation needs a field that is unset (an id, app credentials).
    #[error("Missing required field: '{field}'. This field must be set before it can be used.")]
    MissingRequiredField {
        /// Field name.
        field: &'static str,
    },

    /// The API host override has no scheme or host.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },

    /// Timeouts must be longer than zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
