//! HTTP response types.
//!
//! Besides the raw body, a response carries the Shopify headers the rest of
//! the crate reads: the call limit, the request id, the deprecation notice and
//! the `Link` header that drives cursor pagination.

use std::collections::HashMap;

use crate::config::LinkSelection;

/// Leaky-bucket usage reported in `X-Shopify-Shop-Api-Call-Limit`.
///
/// The header reads `used/size`, e.g. `"40/80"`.
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!((limit.request_count, limit.bucket_size), (32, 40));
/// assert_eq!(limit.remaining(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Calls currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses `used/size`; anything else yields `None`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Calls left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Returns the URL of the first entry of a `Link` header.
///
/// The header is a comma-separated list of `<url>; rel=name` entries. Only the
/// first entry is looked at and its `rel` is ignored. An empty header, or one
/// whose first entry has no `<...>` pair, yields an empty string.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::extract_first_link_url;
///
/// let url = extract_first_link_url("<https://x/y?page_info=hijgklmn&limit=3>; rel=next");
/// assert_eq!(url, "https://x/y?page_info=hijgklmn&limit=3");
/// assert_eq!(extract_first_link_url(""), "");
/// ```
#[must_use]
pub fn extract_first_link_url(header_value: &str) -> String {
    let first = header_value.split(',').next().unwrap_or_default();
    let Some(start) = first.find('<') else {
        return String::new();
    };
    let rest = &first[start + 1..];
    rest.find('>')
        .map_or_else(String::new, |end| rest[..end].to_string())
}

/// Next and previous page URLs parsed from a `Link` header by `rel`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// URL of the previous page, if advertised.
    pub previous_url: Option<String>,
    /// URL of the next page, if advertised.
    pub next_url: Option<String>,
}

impl PaginationInfo {
    /// Parses a `Link` header of the form
    /// `<url>; rel="next", <url>; rel="previous"`.
    ///
    /// `rel` values may be quoted or bare.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';');
            let url = parts
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'))
                .filter(|s| !s.is_empty());

            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|value| value.trim_matches('"'))
            });

            if let (Some(rel), Some(url)) = (rel, url) {
                match rel {
                    "previous" | "prev" => result.previous_url = Some(url.to_string()),
                    "next" => result.next_url = Some(url.to_string()),
                    _ => {}
                }
            }
        }

        result
    }
}

/// An HTTP response from the Shopify API.
///
/// The body is kept as raw bytes; decoding is left to the envelope codec.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// URL of the next page, picked out of `Link` per the configured policy.
    pub next_page_url: Option<String>,
    /// Rate limit information (from `X-Shopify-Shop-Api-Call-Limit` header).
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a response, parsing the `Link` and call limit headers.
    ///
    /// `selection` decides which `Link` entry becomes
    /// [`next_page_url`](Self::next_page_url).
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: Vec<u8>,
        selection: LinkSelection,
    ) -> Self {
        let next_page_url = headers
            .get("link")
            .and_then(|values| values.first())
            .and_then(|link| match selection {
                LinkSelection::RelNext => PaginationInfo::parse_link_header(link).next_url,
                LinkSelection::FirstEntry => {
                    Some(extract_first_link_url(link)).filter(|url| !url.is_empty())
                }
            });

        let api_call_limit = headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value));

        Self {
            code,
            headers,
            body,
            next_page_url,
            api_call_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    const BOTH_LINKS: &str = r#"<https://shop.myshopify.com/admin/api/2020-10/webhooks.json?page_info=xyz789>; rel="previous", <https://shop.myshopify.com/admin/api/2020-10/webhooks.json?page_info=abc123>; rel="next""#;

    #[test]
    fn test_extract_first_link_url() {
        assert_eq!(
            extract_first_link_url("<https://x/y?page_info=hijgklmn&limit=3>; rel=next"),
            "https://x/y?page_info=hijgklmn&limit=3"
        );
    }

    #[test]
    fn test_extract_first_link_url_empty_and_malformed() {
        assert_eq!(extract_first_link_url(""), "");
        assert_eq!(extract_first_link_url("no brackets; rel=next"), "");
        assert_eq!(extract_first_link_url("<unterminated; rel=next"), "");
    }

    #[test]
    fn test_extract_first_link_url_ignores_rel() {
        assert_eq!(
            extract_first_link_url(BOTH_LINKS),
            "https://shop.myshopify.com/admin/api/2020-10/webhooks.json?page_info=xyz789"
        );
    }

    #[test]
    fn test_link_header_parsing_by_rel() {
        let info = PaginationInfo::parse_link_header(BOTH_LINKS);
        assert_eq!(
            info.next_url.as_deref(),
            Some("https://shop.myshopify.com/admin/api/2020-10/webhooks.json?page_info=abc123")
        );
        assert_eq!(
            info.previous_url.as_deref(),
            Some("https://shop.myshopify.com/admin/api/2020-10/webhooks.json?page_info=xyz789")
        );

        let info = PaginationInfo::parse_link_header("<https://x/y?page_info=a>; rel=next");
        assert_eq!(info.next_url.as_deref(), Some("https://x/y?page_info=a"));
        assert!(info.previous_url.is_none());
    }

    #[test]
    fn test_next_page_url_follows_link_selection() {
        let h = headers(&[("link", BOTH_LINKS)]);

        let rel_next = HttpResponse::new(200, h.clone(), Vec::new(), LinkSelection::RelNext);
        let next = rel_next.next_page_url.unwrap();
        assert!(next.ends_with("page_info=abc123"));

        let first = HttpResponse::new(200, h, Vec::new(), LinkSelection::FirstEntry);
        assert!(first.next_page_url.unwrap().ends_with("page_info=xyz789"));
    }

    #[test]
    fn test_no_link_header_means_no_next_page() {
        let response =
            HttpResponse::new(200, HashMap::new(), Vec::new(), LinkSelection::FirstEntry);
        assert!(response.next_page_url.is_none());

        let h = headers(&[("link", "")]);
        let response = HttpResponse::new(200, h, Vec::new(), LinkSelection::FirstEntry);
        assert!(response.next_page_url.is_none());
    }

    #[test]
    fn test_api_call_limit_parsing() {
        assert_eq!(
            ApiCallLimit::parse(" 40 / 80 "),
            Some(ApiCallLimit {
                request_count: 40,
                bucket_size: 80
            })
        );
        for bad in ["invalid", "40", "40/", "/80", "abc/def", "-1/40"] {
            assert!(ApiCallLimit::parse(bad).is_none(), "{bad}");
        }
        assert_eq!(ApiCallLimit::parse("45/40").unwrap().remaining(), 0);
    }

    #[test]
    fn test_response_header_accessors() {
        let h = headers(&[
            ("x-request-id", "abc-123-xyz"),
            ("x-shopify-shop-api-call-limit", "1/40"),
            ("x-shopify-api-deprecated-reason", "Use the newer endpoint"),
        ]);
        let response = HttpResponse::new(200, h, b"{}".to_vec(), LinkSelection::RelNext);

        assert_eq!(response.request_id(), Some("abc-123-xyz"));
        assert_eq!(
            response.api_call_limit,
            Some(ApiCallLimit {
                request_count: 1,
                bucket_size: 40
            })
        );
        assert_eq!(
            response.deprecation_reason(),
            Some("Use the newer endpoint")
        );
        assert_eq!(response.body_text(), "{}");
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        for (code, ok) in [
            (200, true),
            (201, true),
            (299, true),
            (301, false),
            (404, false),
        ] {
            let response =
                HttpResponse::new(code, HashMap::new(), Vec::new(), LinkSelection::RelNext);
            assert_eq!(response.is_ok(), ok, "code {code}");
        }
    }
}
