//! Webhook resource implementation.
//!
//! A webhook subscription tells Shopify to POST event payloads to an
//! address. Listing follows the `Link` header cursor.
//!
//! The topic constants name the events this crate's users commonly
//! subscribe to; the header constants name what Shopify sends along with
//! each delivery.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Webhook, WebhookListParams, TOPIC_APP_UNINSTALLED};
//! use shopify_rest::rest::{ListableResource, RestResource};
//!
//! let webhook = Webhook {
//!     topic: Some(TOPIC_APP_UNINSTALLED.to_string()),
//!     address: Some("https://example.com/hooks/uninstalled".to_string()),
//!     format: Some("json".to_string()),
//!     ..Default::default()
//! };
//! let saved = webhook.create(&client, &ctx).await?;
//!
//! let params = WebhookListParams {
//!     topic: Some(TOPIC_APP_UNINSTALLED.to_string()),
//!     ..Default::default()
//! };
//! let hooks = Webhook::all(&client, &ctx.with_auto_paginate(true), params).await?;
//!
//! Webhook::delete_by_id(&client, &ctx, saved.id.unwrap_or_default()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::pagination::{ListParams, PaginationStrategy};
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::{ListableResource, RestResource};

/// Topic fired when a product is created.
pub const TOPIC_PRODUCTS_CREATE: &str = "products/create";

/// Topic fired when a product is updated.
pub const TOPIC_PRODUCTS_UPDATE: &str = "products/update";

/// Topic fired when a product is deleted.
pub const TOPIC_PRODUCTS_DELETE: &str = "products/delete";

/// Topic fired when the app is uninstalled from a shop.
pub const TOPIC_APP_UNINSTALLED: &str = "app/uninstalled";

/// Header carrying the shop domain of a webhook delivery.
pub const HEADER_SHOP_DOMAIN: &str = "X-Shopify-Shop-Domain";

/// Header carrying the base64 HMAC-SHA256 signature of a webhook delivery.
pub const HEADER_HMAC_SHA256: &str = "X-Shopify-Hmac-Sha256";

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The URI payloads are delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The event that triggers the webhook (e.g., `products/create`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The payload format: `json` or `xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Restricts the payload to these top-level fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Metafield namespaces included in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield_namespaces: Option<Vec<String>>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Webhook {
    const NAME: &'static str = "Webhook";
    const KEY: &'static str = "webhook";
    const PLURAL: &'static str = "webhooks";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "webhooks/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, "webhooks"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "webhooks"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "webhooks/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ListableResource for Webhook {
    type ListParams = WebhookListParams;

    const PAGINATION: PaginationStrategy = PaginationStrategy::CursorFollow;
}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookListParams {
    /// Return only webhooks delivering to this address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Return only webhooks subscribed to this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Maximum number of results per page (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Fields to include in the response, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ListParams for WebhookListParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::envelope;
    use crate::rest::path::get_path;

    #[test]
    fn test_webhook_create_body_is_enveloped_without_read_only_fields() {
        let webhook = Webhook {
            id: Some(4759306),
            address: Some("https://example.com/hooks".to_string()),
            topic: Some(TOPIC_PRODUCTS_CREATE.to_string()),
            format: Some("json".to_string()),
            created_at: Some(Utc::now()),
            ..Default::default()
        };

        let body = envelope::encode(&webhook, Webhook::KEY).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "webhook": {
                    "address": "https://example.com/hooks",
                    "topic": "products/create",
                    "format": "json"
                }
            })
        );
    }

    #[test]
    fn test_webhook_deserialization() {
        let json = r#"{
            "id": 4759306,
            "address": "http://apple.com",
            "topic": "orders/create",
            "format": "json",
            "fields": ["id", "note"],
            "metafield_namespaces": [],
            "created_at": "2021-12-01T05:23:43-05:00",
            "updated_at": "2021-12-01T05:23:43-05:00",
            "api_version": "2020-10"
        }"#;

        let webhook: Webhook = serde_json::from_str(json).unwrap();

        assert_eq!(webhook.get_id(), Some(4759306));
        assert_eq!(webhook.topic.as_deref(), Some("orders/create"));
        assert_eq!(
            webhook.fields,
            Some(vec!["id".to_string(), "note".to_string()])
        );
        assert!(webhook.updated_at.is_some());
    }

    #[test]
    fn test_webhook_paths() {
        assert_eq!(
            get_path(Webhook::PATHS, ResourceOperation::Delete)
                .unwrap()
                .template,
            "webhooks/{id}"
        );
        assert_eq!(Webhook::PAGINATION, PaginationStrategy::CursorFollow);
    }

    #[test]
    fn test_topic_and_header_constants() {
        assert_eq!(TOPIC_PRODUCTS_UPDATE, "products/update");
        assert_eq!(TOPIC_PRODUCTS_DELETE, "products/delete");
        assert_eq!(HEADER_SHOP_DOMAIN, "X-Shopify-Shop-Domain");
        assert_eq!(HEADER_HMAC_SHA256, "X-Shopify-Hmac-Sha256");
    }
}
