//! Error types for REST resource operations.
//!
//! Every failure of a resource operation is a [`RestError`]. Each variant
//! carries the operation context (resource name and URL, plus page and
//! cursor for pagination) and [`RestError::kind`] collapses them into the
//! coarse [`ErrorKind`] callers usually branch on.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{ErrorKind, Product};
//!
//! match Product::find(&client, &ctx, 123).await {
//!     Ok(product) => println!("Found: {:?}", product.title),
//!     Err(e) if e.kind() == ErrorKind::Remote => {
//!         println!("Shopify said: {}", e.remote_body().unwrap_or_default());
//!     }
//!     Err(e) if e.is_cancelled() => println!("cancelled"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Coarse classification of a [`RestError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid configuration: empty shop or token, missing app
    /// credentials, missing resource id, empty path.
    Configuration,
    /// Query options or a request body could not be encoded.
    Encoding,
    /// Network or connection failure, or a timeout.
    Transport,
    /// The server answered with a status of 300 or above.
    Remote,
    /// The response envelope was malformed or missing.
    Decoding,
    /// The caller's cancellation handle fired.
    Cancelled,
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{ConfigError, ErrorKind, RestError};
///
/// let error = RestError::from(ConfigError::EmptyAccessToken);
/// assert_eq!(error.kind(), ErrorKind::Configuration);
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Configuration or request context validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The resource declares no path for the requested operation.
    #[error("{resource} does not support the '{operation}' operation")]
    UnsupportedOperation {
        /// The resource name.
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// Options or a body could not be encoded.
    #[error("Failed to encode {what}: {message}")]
    Encoding {
        /// What was being encoded (for example `Product query options`).
        what: String,
        /// Why encoding failed.
        message: String,
    },

    /// The HTTP call for an operation failed.
    #[error("{resource} request to {url} failed: {source}")]
    Http {
        /// The resource name.
        resource: &'static str,
        /// The request URL.
        url: String,
        /// The transport error.
        #[source]
        source: HttpError,
    },

    /// The response envelope could not be decoded.
    #[error("Failed to decode {resource} response from {url}: {message}")]
    Decoding {
        /// The resource name.
        resource: &'static str,
        /// The request URL.
        url: String,
        /// Why decoding failed.
        message: String,
    },

    /// A page of a list operation failed; earlier pages were discarded.
    #[error("Listing {resource} failed on page {page} ({cursor}): {source}")]
    Pagination {
        /// The resource name.
        resource: &'static str,
        /// The 1-based number of the page that failed.
        page: usize,
        /// The cursor URL or `since_id=N` watermark of that page.
        cursor: String,
        /// The error of the failing page.
        #[source]
        source: Box<RestError>,
    },
}

impl RestError {
    /// Returns the coarse classification of this error.
    ///
    /// Pagination errors report the kind of the page failure they wrap.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::Config(_) | Self::InvalidPath { .. } | Self::UnsupportedOperation { .. } => {
                ErrorKind::Configuration
            }
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::Decoding { .. } => ErrorKind::Decoding,
            Self::Http { source, .. } => match source {
                HttpError::Response(_) => ErrorKind::Remote,
                HttpError::Cancelled => ErrorKind::Cancelled,
                HttpError::Network(_) | HttpError::TimedOut(_) => ErrorKind::Transport,
                HttpError::InvalidRequest(_) => ErrorKind::Configuration,
            },
            Self::Pagination { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error, looking through pagination wrappers.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Pagination { source, .. } = current {
            current = source;
        }
        current
    }

    /// Returns `true` if the operation was cancelled by the caller.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }

    /// Returns the HTTP status for remote errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Http { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns the response body text for remote errors.
    #[must_use]
    pub fn remote_body(&self) -> Option<&str> {
        match self.root() {
            Self::Http {
                source: HttpError::Response(e),
                ..
            } => Some(e.body.as_str()),
            _ => None,
        }
    }

    pub(crate) fn http(resource: &'static str, url: &str, source: HttpError) -> Self {
        Self::Http {
            resource,
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decoding(
        resource: &'static str,
        url: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Decoding {
            resource,
            url: url.to_string(),
            message: message.into(),
        }
    }
}

// Verify RestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
};
