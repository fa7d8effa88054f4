//! Collection resource implementation.
//!
//! Covers both custom and smart collections as returned by
//! `collections/{id}.json`. Only [`find`](crate::rest::RestResource::find)
//! is available; the other operations fail with
//! [`RestError::UnsupportedOperation`](crate::RestError::UnsupportedOperation).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Collection;
//! use shopify_rest::rest::RestResource;
//!
//! let collection = Collection::find(&client, &ctx, 841564295).await?;
//! for rule in collection.rules.unwrap_or_default() {
//!     println!("{:?} {:?} {:?}", rule.column, rule.relation, rule.condition);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::RestResource;

use super::common::Metafield;

/// A grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collection {
    /// The unique identifier of the collection.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the collection, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CollectionImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    /// Whether the collection is visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// The order of products in the collection (e.g., `manual`, `best-selling`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// The conditions of a smart collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CollectionRule>>,

    /// Whether a product must match any rule (`true`) or every rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,

    #[serde(skip_serializing)]
    pub products_manually_sorted_count: Option<u64>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The image of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionImage {
    /// The location of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A condition of a smart collection, such as `title contains shirt`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionRule {
    /// The product property tested (e.g., `title`, `vendor`, `tag`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// The comparison (e.g., `equals`, `contains`, `greater_than`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// The value compared against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl RestResource for Collection {
    const NAME: &'static str = "Collection";
    const KEY: &'static str = "collection";
    const PLURAL: &'static str = "collections";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        "collections/{id}",
    )];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}
