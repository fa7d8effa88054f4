//! Validated newtype wrappers for configuration and credential values.
//!
//! Each wrapper validates its contents on construction, so a value of one of
//! these types is always usable when building a request.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declares a credential newtype that rejects blank input.
///
/// `masked` credentials print `Name(*****)` from `Debug`.
macro_rules! credential {
    (@define $(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`ConfigError::", stringify!($error), "`] if the value is empty or only whitespace.")]
            pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ConfigError::$error);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $error:ident, masked) => {
        credential!(@define $(#[$meta])* #[derive(Clone, PartialEq, Eq)] $name, $error);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(*****)"))
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        credential!(@define $(#[$meta])* #[derive(Clone, Debug, PartialEq, Eq)] $name, $error);
    };
}

credential!(
    /// The app's API key, sent as the OAuth `client_id`.
    ///
    /// ```rust
    /// use shopify_rest::ApiKey;
    ///
    /// let key = ApiKey::new("my-api-key").unwrap();
    /// assert_eq!(key.as_ref(), "my-api-key");
    /// ```
    ApiKey,
    EmptyApiKey
);

credential!(
    /// The app's API secret, sent as the OAuth `client_secret`.
    ///
    /// ```rust
    /// use shopify_rest::ApiSecretKey;
    ///
    /// let secret = ApiSecretKey::new("my-secret").unwrap();
    /// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
    /// ```
    ApiSecretKey,
    EmptyApiSecretKey,
    masked
);

credential!(
    /// A shop's Admin API access token, sent as `X-Shopify-Access-Token`.
    ///
    /// Masked in `Debug` output so tokens never reach logs.
    ///
    /// ```rust
    /// use shopify_rest::AccessToken;
    ///
    /// let token = AccessToken::new("shpat_123").unwrap();
    /// assert_eq!(token.as_ref(), "shpat_123");
    /// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
    /// ```
    AccessToken,
    EmptyAccessToken,
    masked
);

credential!(
    /// A private app's password, sent with its API key as basic
    /// authentication.
    ///
    /// ```rust
    /// use shopify_rest::ApiPassword;
    ///
    /// let password = ApiPassword::new("private-pass").unwrap();
    /// assert_eq!(format!("{password:?}"), "ApiPassword(*****)");
    /// ```
    ApiPassword,
    EmptyApiPassword,
    masked
);

/// The host a shop's Admin API is served from.
///
/// The host is used as given, with an optional `:port`. A leading
/// `https://` and a trailing `/` are dropped. A bare shop name, one with no
/// `.` and no `:`, is shorthand for `{name}.myshopify.com`.
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let bare = ShopDomain::new("my-store").unwrap();
/// assert_eq!(bare.as_ref(), "my-store.myshopify.com");
///
/// let domain = ShopDomain::new("https://my-store.myshopify.com/").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// let local = ShopDomain::new("127.0.0.1:8443").unwrap();
/// assert_eq!(local.as_ref(), "127.0.0.1:8443");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Validates `domain`, expanding a bare shop name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopDomain`] for blank input and
    /// [`ConfigError::InvalidShopDomain`] when the input is not a host name
    /// (letters, digits, `-` and `.`) with an optional numeric port.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw: String = domain.into();
        let trimmed = raw.trim();
        let host = trimmed
            .strip_prefix("https://")
            .unwrap_or(trimmed)
            .trim_end_matches('/');

        if host.is_empty() {
            return Err(ConfigError::EmptyShopDomain);
        }
        if !Self::is_host(host) {
            return Err(ConfigError::InvalidShopDomain {
                domain: host.to_string(),
            });
        }

        if host.contains(['.', ':']) {
            Ok(Self(host.to_string()))
        } else {
            Ok(Self(format!("{host}{}", Self::SUFFIX)))
        }
    }

    /// Returns the shop name of a `*.myshopify.com` domain, or the whole
    /// host otherwise.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.0.strip_suffix(Self::SUFFIX).unwrap_or(&self.0)
    }

    fn is_host(value: &str) -> bool {
        let (name, port) = value
            .split_once(':')
            .map_or((value, None), |(name, port)| (name, Some(port)));

        let name_ok = !name.is_empty()
            && !name.starts_with(['-', '.'])
            && !name.ends_with(['-', '.'])
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.');
        let port_ok = port.map_or(true, |port| {
            !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
        });

        name_ok && port_ok
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(de::Error::custom)
    }
}

/// Where Admin API requests go instead of `https://{shop}`.
///
/// Only the origin (`scheme://host[:port]`) takes part in request URLs; any
/// path, query or fragment is kept for display but ignored.
///
/// ```rust
/// use shopify_rest::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.origin(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    origin_len: usize,
}

impl HostUrl {
    const SEPARATOR: &'static str = "://";

    /// Parses `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is missing or
    /// not alphabetic, or if there is no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().to_string();

        let parsed = url.split_once(Self::SEPARATOR).and_then(|(scheme, rest)| {
            let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
            let host = rest[..authority_len].split(':').next().unwrap_or_default();
            let valid = !scheme.is_empty()
                && scheme.bytes().all(|b| b.is_ascii_alphabetic())
                && !host.is_empty();
            valid.then_some(scheme.len() + Self::SEPARATOR.len() + authority_len)
        });

        match parsed {
            Some(origin_len) => Ok(Self { url, origin_len }),
            None => Err(ConfigError::InvalidHostUrl { url }),
        }
    }

    /// Returns the scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url
            .split_once(Self::SEPARATOR)
            .map_or("", |(scheme, _)| scheme)
    }

    /// Returns the host without the port.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let authority = &self.origin()[self.scheme().len() + Self::SEPARATOR.len()..];
        authority.split(':').next().filter(|host| !host.is_empty())
    }

    /// Returns `scheme://host[:port]` without any path, query or fragment.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.origin_len]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
