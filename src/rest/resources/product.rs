//! Product resource implementation.
//!
//! Products carry their variants, options and images inline. Listing uses
//! since-id pagination: set [`ProductListParams::fetch_all`] to walk every
//! page.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Product, ProductListParams};
//! use shopify_rest::rest::{ListableResource, RestResource};
//!
//! // Find a single product
//! let product = Product::find(&client, &ctx, 632910392).await?;
//! println!("Product: {}", product.title.as_deref().unwrap_or(""));
//!
//! // List every product of a vendor
//! let params = ProductListParams {
//!     vendor: Some("Burton".to_string()),
//!     limit: Some(250),
//!     fetch_all: true,
//!     ..Default::default()
//! };
//! let products = Product::all(&client, &ctx, params).await?;
//!
//! // Create a new product
//! let product = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     vendor: Some("Burton".to_string()),
//!     ..Default::default()
//! };
//! let saved = product.create(&client, &ctx).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::pagination::{ListParams, PaginationStrategy};
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::{ListableResource, RestResource};

use super::common::{Metafield, PresentmentPrice};

/// A product offered by the shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the product, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization used for filtering and searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// A unique human-friendly string, generated from the title when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The suffix of the Liquid template used for the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Where the product is published (`web` or `global`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// When the product was published. Unset means hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_title_tag: Option<String>,

    /// The SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_description_tag: Option<String>,

    /// The product's variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// The option names and values (up to three).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    /// All images of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    /// The featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    /// When the product was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A purchasable variation of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The original price before a discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// Prices in the shop's presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_prices: Option<Vec<PresentmentPrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The position in the product's variant list, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// The value of the first product option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the second product option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the third product option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// The fulfillment service handling this variant (`manual` by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// The service tracking inventory, or unset when untracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// Whether orders are accepted when out of stock (`deny` or `continue`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// The inventory item linked to this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// The image shown for this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,

    /// The weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// The weight in [`weight_unit`](Self::weight_unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// The unit of [`weight`](Self::weight): `g`, `kg`, `oz` or `lb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// Metafields sent along with a new variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product option such as "Size" or "Color".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// The values the option takes across variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// An image of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The order of the image in the product's image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// The location of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Variants that show this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Product {
    const NAME: &'static str = "Product";
    const KEY: &'static str = "product";
    const PLURAL: &'static str = "products";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "products/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, "products"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "products"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "products/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ListableResource for Product {
    type ListParams = ProductListParams;

    const PAGINATION: PaginationStrategy = PaginationStrategy::SinceId;
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Return only products with the given IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results per page (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return products after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Return only products in this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Fields to include in the response, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Currencies to return presentment prices in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<Vec<String>>,

    /// Follow since-id pages until a short page is returned.
    #[serde(skip)]
    pub fetch_all: bool,
}

impl ListParams for ProductListParams {
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
