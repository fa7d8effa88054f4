//! OAuth authorization code exchange.
//!
//! After a merchant approves the app, Shopify redirects back with a
//! one-time `code`. [`request_access_token`] trades it for a permanent
//! access token. The call is made once; there is no retry and no refresh.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::auth::oauth::request_access_token;
//! use shopify_rest::{ApiKey, ApiSecretKey, CancelHandle, RestClient, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .api_secret_key(ApiSecretKey::new("your-secret")?)
//!     .build()?;
//! let client = RestClient::new(config)?;
//!
//! let shop = ShopDomain::new("my-store")?;
//! let cancel = CancelHandle::new();
//! let response = request_access_token(&client, &shop, "code-from-callback", &cancel).await?;
//! let ctx = response.into_context(shop)?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::{CancelHandle, RequestContext};
use crate::clients::{HttpMethod, HttpRequest, RestClient, RestError};
use crate::config::{AccessToken, ShopDomain};
use crate::error::ConfigError;
use crate::rest::origin;

const RESOURCE: &str = "OAuth";

/// Path of the token endpoint, relative to the shop origin.
pub const ACCESS_TOKEN_PATH: &str = "/admin/oauth/access_token";

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// The token endpoint's answer.
///
/// The `Debug` implementation masks the access token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthResponse {
    /// The permanent access token.
    pub access_token: String,
    /// The comma-separated scopes granted.
    pub scope: String,
}

impl OAuthResponse {
    /// Builds the request context for calls on behalf of `shop`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn into_context(self, shop: ShopDomain) -> Result<RequestContext, ConfigError> {
        Ok(RequestContext::from_parts(
            shop,
            AccessToken::new(self.access_token)?,
        ))
    }
}

impl fmt::Debug for OAuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthResponse")
            .field("access_token", &"*****")
            .field("scope", &self.scope)
            .finish()
    }
}

/// Exchanges an authorization `code` for an access token.
///
/// POSTs `{client_id, client_secret, code}` to
/// `https://{shop}/admin/oauth/access_token`, or to the configured API host
/// when one is set. The app credentials come from the client's
/// configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] if the configuration has no
/// API key or secret, [`RestError::Http`] if the call fails or is refused,
/// and [`RestError::Decoding`] if the answer is not a token response.
pub async fn request_access_token(
    client: &RestClient,
    shop: &ShopDomain,
    code: &str,
    cancel: &CancelHandle,
) -> Result<OAuthResponse, RestError> {
    let config = client.config();
    let api_key = config
        .api_key()
        .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
    let api_secret_key = config
        .api_secret_key()
        .ok_or(ConfigError::MissingRequiredField {
            field: "api_secret_key",
        })?;

    let url = format!("{}{ACCESS_TOKEN_PATH}", origin(shop, config.api_host()));

    let body = serde_json::to_value(AccessTokenRequest {
        client_id: api_key.as_ref(),
        client_secret: api_secret_key.as_ref(),
        code,
    })
    .map_err(|e| RestError::Encoding {
        what: "OAuth request".to_string(),
        message: e.to_string(),
    })?;

    let request = HttpRequest::builder(HttpMethod::Post, &url)
        .body(body)
        .build()
        .map_err(|e| RestError::http(RESOURCE, &url, e.into()))?;

    let response = client
        .http_client()
        .request(request, cancel, config.timeout())
        .await
        .map_err(|e| RestError::http(RESOURCE, &url, e))?;

    serde_json::from_slice(&response.body)
        .map_err(|e| RestError::decoding(RESOURCE, &url, e.to_string()))
}
