//! REST resource models.
//!
//! Each resource is a plain data structure mirroring the vendor JSON, plus a
//! [`RestResource`](crate::rest::RestResource) implementation declaring its
//! envelope keys and path table. Listable resources also implement
//! [`ListableResource`](crate::rest::ListableResource) and pick a pagination
//! strategy.
//!
//! | Resource | Operations | Pagination |
//! |---|---|---|
//! | [`Shop`] | `current` | |
//! | [`Product`] | `find`, `create`, `delete`, `all` | since-id |
//! | [`Collect`] | `find`, `all` | since-id |
//! | [`Collection`] | `find` | |
//! | [`Webhook`] | `find`, `create`, `delete`, `delete_by_id`, `all` | cursor |
//! | [`ScriptTag`] | `find`, `create`, `delete`, `all` | cursor |
//! | [`RecurringApplicationCharge`] | `find`, `create`, `activate`, `delete`, `all` | since-id |
//!
//! # Field Conventions
//!
//! - `id` and timestamps are read-only and never serialized into bodies
//! - Optional fields are omitted from bodies when unset
//! - Unknown fields in responses are ignored

mod collect;
mod collection;
mod common;
mod product;
mod recurring_application_charge;
mod script_tag;
mod shop;
mod webhook;

pub use collect::{Collect, CollectListParams};
pub use collection::{Collection, CollectionImage, CollectionRule};
pub use common::{Metafield, PresentmentPrice, Price};
pub use product::{Product, ProductImage, ProductListParams, ProductOption, ProductVariant};
pub use recurring_application_charge::{
    RecurringApplicationCharge, RecurringApplicationChargeListParams,
};
pub use script_tag::{ScriptTag, ScriptTagListParams};
pub use shop::Shop;
pub use webhook::{
    Webhook, WebhookListParams, HEADER_HMAC_SHA256, HEADER_SHOP_DOMAIN, TOPIC_APP_UNINSTALLED,
    TOPIC_PRODUCTS_CREATE, TOPIC_PRODUCTS_DELETE, TOPIC_PRODUCTS_UPDATE,
};
