//! Script tag resource implementation.
//!
//! A script tag loads a remote script into the storefront or the order
//! status page. Listing follows the `Link` header cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::ScriptTag;
//! use shopify_rest::rest::RestResource;
//!
//! let tag = ScriptTag {
//!     event: Some("onload".to_string()),
//!     src: Some("https://example.com/widget.js".to_string()),
//!     ..Default::default()
//! };
//! let saved = tag.create(&client, &ctx).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::pagination::{ListParams, PaginationStrategy};
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::{ListableResource, RestResource};

/// A remote script loaded into shop pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptTag {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The DOM event that loads the script. Only `onload` is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// The URL of the script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Where the script is included: `online_store`, `order_status` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_scope: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for ScriptTag {
    const NAME: &'static str = "ScriptTag";
    const KEY: &'static str = "script_tag";
    const PLURAL: &'static str = "script_tags";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "script_tags/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, "script_tags"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "script_tags"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "script_tags/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ListableResource for ScriptTag {
    type ListParams = ScriptTagListParams;

    const PAGINATION: PaginationStrategy = PaginationStrategy::CursorFollow;
}

/// Parameters for listing script tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptTagListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Return only script tags loading this URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ListParams for ScriptTagListParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::query::encode_query;

    #[test]
    fn test_script_tag_round_trips_visible_fields() {
        let tag = ScriptTag {
            event: Some("onload".to_string()),
            src: Some("https://example.com/widget.js".to_string()),
            display_scope: Some("all".to_string()),
            ..Default::default()
        };

        let mut echo = serde_json::to_value(&tag).unwrap();
        echo["id"] = serde_json::json!(870402694);
        echo["created_at"] = serde_json::json!("2024-01-15T10:30:00Z");

        let decoded: ScriptTag = serde_json::from_value(echo).unwrap();

        assert_eq!(decoded.id, Some(870402694));
        assert_eq!(decoded.event, tag.event);
        assert_eq!(decoded.src, tag.src);
        assert_eq!(decoded.display_scope, tag.display_scope);
    }

    #[test]
    fn test_list_params_query() {
        let params = ScriptTagListParams {
            src: Some("https://js.example.org/foo.js".to_string()),
            limit: Some(10),
            ..Default::default()
        };

        assert_eq!(
            encode_query(&params).unwrap(),
            "limit=10&src=https%3A%2F%2Fjs.example.org%2Ffoo.js"
        );
    }
}
