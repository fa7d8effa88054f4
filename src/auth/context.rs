//! Per-operation request context and cancellation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::{AccessToken, ApiKey, ApiPassword, ShopDomain};
use crate::error::ConfigError;

/// A cloneable signal that aborts in-flight requests.
///
/// Every clone observes the same state. Once [`cancel`](Self::cancel) is
/// called the handle stays cancelled; any request started with it, or
/// currently waiting on the network, fails with a cancellation error.
///
/// # Example
///
/// ```rust
/// use shopify_rest::CancelHandle;
///
/// let handle = CancelHandle::new();
/// let observer = handle.clone();
/// assert!(!observer.is_cancelled());
///
/// handle.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Creates a handle that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Cancels every request observing this handle.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Completes when the handle is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a single logical operation needs to talk to one shop.
///
/// A context carries the shop domain, its access token, optional
/// private-app credentials, the caller's cancellation handle, an optional
/// per-call timeout and whether list operations should follow pagination
/// cursors. It is immutable: pagination
/// state is kept by the operation itself, so one context can be shared by
/// concurrent operations.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_rest::RequestContext;
///
/// let ctx = RequestContext::new("my-store", "shpat_token")
///     .unwrap()
///     .with_timeout(Duration::from_secs(10))
///     .with_auto_paginate(true);
///
/// assert_eq!(ctx.shop().as_ref(), "my-store.myshopify.com");
/// assert!(ctx.auto_paginate());
/// ```
#[derive(Clone, Debug)]
pub struct RequestContext {
    shop: ShopDomain,
    access_token: AccessToken,
    private_app: Option<(ApiKey, ApiPassword)>,
    cancel: CancelHandle,
    timeout: Option<Duration>,
    auto_paginate: bool,
}

// Verify RequestContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestContext>();
};

impl RequestContext {
    /// Creates a context for `shop` authenticated with `access_token`.
    ///
    /// Auto-pagination is off and no timeout is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopDomain`] or
    /// [`ConfigError::EmptyAccessToken`] when either value is empty, and
    /// [`ConfigError::InvalidShopDomain`] for a malformed domain.
    pub fn new(
        shop: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let shop = ShopDomain::new(shop)?;
        let access_token = AccessToken::new(access_token)?;
        Ok(Self::from_parts(shop, access_token))
    }

    /// Creates a context for a private app.
    ///
    /// Requests carry basic authentication with `api_key` and `password`,
    /// and the password doubles as the access token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::RequestContext;
    ///
    /// let ctx = RequestContext::private_app("my-store", "key", "pass").unwrap();
    /// let (key, _) = ctx.private_app_credentials().unwrap();
    /// assert_eq!(key.as_ref(), "key");
    /// assert_eq!(ctx.access_token().as_ref(), "pass");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopDomain`],
    /// [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyApiPassword`] when
    /// a value is blank.
    pub fn private_app(
        shop: impl Into<String>,
        api_key: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let shop = ShopDomain::new(shop)?;
        let api_key = ApiKey::new(api_key)?;
        let password = ApiPassword::new(password)?;
        let access_token = AccessToken::new(password.as_ref())?;
        Ok(Self::from_parts(shop, access_token).with_private_app(api_key, password))
    }

    /// Creates a context from already validated values.
    #[must_use]
    pub fn from_parts(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self {
            shop,
            access_token,
            private_app: None,
            cancel: CancelHandle::new(),
            timeout: None,
            auto_paginate: false,
        }
    }

    /// Adds private-app basic authentication to every request.
    #[must_use]
    pub fn with_private_app(mut self, api_key: ApiKey, password: ApiPassword) -> Self {
        self.private_app = Some((api_key, password));
        self
    }

    /// Uses `cancel` to abort requests made with this context.
    #[must_use]
    pub fn with_cancel_handle(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    /// Bounds every HTTP call made with this context by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables following `Link` cursors on list operations.
    #[must_use]
    pub const fn with_auto_paginate(mut self, auto_paginate: bool) -> Self {
        self.auto_paginate = auto_paginate;
        self
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the private-app API key and password, if set.
    #[must_use]
    pub fn private_app_credentials(&self) -> Option<(&ApiKey, &ApiPassword)> {
        self.private_app
            .as_ref()
            .map(|(api_key, password)| (api_key, password))
    }

    /// Returns the cancellation handle.
    #[must_use]
    pub const fn cancel_handle(&self) -> &CancelHandle {
        &self.cancel
    }

    /// Returns the per-call timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether list operations follow `Link` cursors.
    #[must_use]
    pub const fn auto_paginate(&self) -> bool {
        self.auto_paginate
    }

    /// Returns `true` if the context's handle has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
