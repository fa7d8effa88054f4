//! Collect resource implementation.
//!
//! A collect links one product to one custom collection. Collects can be
//! fetched and listed; listing uses since-id pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Collect, CollectListParams};
//! use shopify_rest::rest::ListableResource;
//!
//! let params = CollectListParams {
//!     collection_id: Some(841564295),
//!     fetch_all: true,
//!     ..Default::default()
//! };
//! let collects = Collect::all(&client, &ctx, params).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::pagination::{ListParams, PaginationStrategy};
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::{ListableResource, RestResource};

/// The membership of a product in a custom collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collect {
    /// The unique identifier of the collect.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The collection containing the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// The product in the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// The position of the product in a manually sorted collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// The zero-padded position used for sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Collect {
    const NAME: &'static str = "Collect";
    const KEY: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "collects/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, "collects"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ListableResource for Collect {
    type ListParams = CollectListParams;

    const PAGINATION: PaginationStrategy = PaginationStrategy::SinceId;
}

/// Parameters for listing collects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectListParams {
    /// Maximum number of results per page (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return collects after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Fields to include in the response, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Follow since-id pages until a short page is returned.
    #[serde(skip)]
    pub fetch_all: bool,
}

impl ListParams for CollectListParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn since_id(&self) -> Option<u64> {
        self.since_id
    }

    fn set_since_id(&mut self, since_id: u64) {
        self.since_id = Some(since_id);
    }

    fn fetch_all(&self) -> bool {
        self.fetch_all
    }
}
