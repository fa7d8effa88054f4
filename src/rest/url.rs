//! Admin API URL construction.
//!
//! URLs have the shape `https://{shop}/admin/api/{version}/{path}.json`. The
//! shop domain is used as given, never re-encoded. When the configuration
//! carries an API host override, its origin replaces `https://{shop}`.

use crate::clients::RestError;
use crate::config::{ApiVersion, HostUrl, ShopDomain};

/// Builds request URLs for one shop and API version.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::UrlBuilder;
/// use shopify_rest::{ApiVersion, ShopDomain};
///
/// let shop = ShopDomain::new("my-store").unwrap();
/// let urls = UrlBuilder::new(&shop, &ApiVersion::V2020_10, None);
///
/// assert_eq!(
///     urls.simple("products").unwrap(),
///     "https://my-store.myshopify.com/admin/api/2020-10/products.json"
/// );
/// assert_eq!(
///     urls.with_id("products", 632910392).unwrap(),
///     "https://my-store.myshopify.com/admin/api/2020-10/products/632910392.json"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Creates a builder rooted at `/admin/api/{version}` of the shop, or of
    /// `api_host` when given.
    #[must_use]
    pub fn new(shop: &ShopDomain, version: &ApiVersion, api_host: Option<&HostUrl>) -> Self {
        Self {
            base: format!("{}/admin/api/{version}", origin(shop, api_host)),
        }
    }

    /// Returns the `{origin}/admin/api/{version}` prefix.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the URL of a resource collection, e.g. `products.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if `resource` is empty.
    pub fn simple(&self, resource: &str) -> Result<String, RestError> {
        self.path(resource)
    }

    /// Returns the URL of a single resource, e.g. `products/{id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if `resource` is empty.
    pub fn with_id(&self, resource: &str, id: u64) -> Result<String, RestError> {
        let resource = strip_path(resource);
        if resource.is_empty() {
            return Err(RestError::InvalidPath {
                path: String::new(),
            });
        }
        self.path(&format!("{resource}/{id}"))
    }

    /// Returns the URL of an already interpolated path template.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if `path` is empty.
    pub fn path(&self, path: &str) -> Result<String, RestError> {
        Ok(format!("{}/{}", self.base, normalize_path(path)?))
    }
}

/// Returns `scheme://host[:port]` requests for `shop` are sent to.
#[must_use]
pub fn origin(shop: &ShopDomain, api_host: Option<&HostUrl>) -> String {
    api_host.map_or_else(
        || format!("https://{}", shop.as_ref()),
        |host| host.origin().to_string(),
    )
}

/// Appends an encoded query string to `url`, if there is one.
#[must_use]
pub fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{url}?{query}")
    }
}

fn strip_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    path.strip_suffix(".json").unwrap_or(path)
}

/// Normalizes a REST API path.
///
/// Leading `/` characters and a trailing `.json` are stripped, then `.json`
/// is appended, so the suffix appears exactly once.
///
/// # Errors
///
/// Returns [`RestError::InvalidPath`] if nothing is left after stripping.
pub fn normalize_path(path: &str) -> Result<String, RestError> {
    let stripped = strip_path(path);
    if stripped.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(format!("{stripped}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UrlBuilder {
        let shop = ShopDomain::new("test-shop").unwrap();
        UrlBuilder::new(&shop, &ApiVersion::V2020_07, None)
    }

    #[test]
    fn test_collection_and_single_resource_urls() {
        let urls = builder();
        assert_eq!(
            urls.simple("webhooks").unwrap(),
            "https://test-shop.myshopify.com/admin/api/2020-07/webhooks.json"
        );
        assert_eq!(
            urls.with_id("webhooks", 4_759_306).unwrap(),
            "https://test-shop.myshopify.com/admin/api/2020-07/webhooks/4759306.json"
        );
    }

    #[test]
    fn test_json_suffix_appended_once() {
        let urls = builder();
        assert_eq!(
            urls.simple("/shop.json").unwrap(),
            "https://test-shop.myshopify.com/admin/api/2020-07/shop.json"
        );
        assert_eq!(
            urls.with_id("products.json", 1).unwrap(),
            "https://test-shop.myshopify.com/admin/api/2020-07/products/1.json"
        );
    }

    #[test]
    fn test_empty_resource_fails() {
        let urls = builder();
        assert!(matches!(urls.simple(""), Err(RestError::InvalidPath { .. })));
        assert!(matches!(urls.simple("/.json"), Err(RestError::InvalidPath { .. })));
        assert!(matches!(urls.with_id("", 1), Err(RestError::InvalidPath { .. })));
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            builder()
                .path("recurring_application_charges/455696195/activate")
                .unwrap(),
            "https://test-shop.myshopify.com/admin/api/2020-07/recurring_application_charges/455696195/activate.json"
        );
    }

    #[test]
    fn test_api_host_override_replaces_origin() {
        let shop = ShopDomain::new("test-shop").unwrap();
        let host = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
        let urls = UrlBuilder::new(&shop, &ApiVersion::V2020_10, Some(&host));

        assert_eq!(urls.base(), "http://127.0.0.1:8080/admin/api/2020-10");
        assert_eq!(origin(&shop, None), "https://test-shop.myshopify.com");
    }

    #[test]
    fn test_shop_host_is_used_as_given() {
        for (shop, expected) in [
            (
                "shop.example.com",
                "https://shop.example.com/admin/api/2020-10/products.json",
            ),
            (
                "127.0.0.1:8443",
                "https://127.0.0.1:8443/admin/api/2020-10/products.json",
            ),
        ] {
            let shop = ShopDomain::new(shop).unwrap();
            let urls = UrlBuilder::new(&shop, &ApiVersion::V2020_10, None);
            assert_eq!(urls.simple("products").unwrap(), expected);
        }
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("https://x/y.json", ""), "https://x/y.json");
        assert_eq!(
            with_query("https://x/y.json", "limit=3"),
            "https://x/y.json?limit=3"
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("products").unwrap(), "products.json");
        assert_eq!(normalize_path("/products").unwrap(), "products.json");
        assert_eq!(normalize_path("products.json").unwrap(), "products.json");
        assert_eq!(normalize_path("/products.json").unwrap(), "products.json");
    }
}
