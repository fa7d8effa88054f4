//! Shop resource implementation.
//!
//! The shop is a singleton: there is exactly one per access token, read with
//! [`Shop::current`]. It has no find, create, delete or list operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Shop;
//!
//! let shop = Shop::current(&client, &ctx).await?;
//! println!("Shop: {}", shop.name.as_deref().unwrap_or(""));
//! println!("Plan: {}", shop.plan_name.as_deref().unwrap_or(""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::RequestContext;
use crate::clients::{RestClient, RestError};
use crate::rest::envelope;

/// A Shopify shop.
///
/// All fields are read-only on the server side; the struct serializes only
/// so that it can be cached or logged by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shop {
    /// The unique identifier of the shop.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The contact email of the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The email customers see in notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// The shop's primary domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// The `.myshopify.com` domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myshopify_domain: Option<String>,

    /// The name of the shop owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_owner: Option<String>,

    /// The contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// The three-letter code of the shop's default currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Currencies customers can pay in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_presentment_currencies: Option<Vec<String>>,

    /// Format of prices shown in the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_in_emails_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_with_currency_format: Option<String>,

    /// The shop's timezone in display form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// The IANA name of the shop's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iana_timezone: Option<String>,

    /// The shop's primary locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,

    /// The default unit for product weights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// The subscription plan name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,

    /// The subscription plan name as shown to merchants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_display_name: Option<String>,

    /// The channel the shop was created through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_login_enabled: Option<bool>,

    /// Whether the shop can take payments through the Checkout API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_api_supported: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_taxes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_for_card_reader_giveaway: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_for_payments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_ssl: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_discounts: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gift_cards: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_storefront: Option<bool>,

    /// Whether the shop has more than one location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_location_enabled: Option<bool>,

    /// Whether the storefront is password protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_launch_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_extra_payments_agreement: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_required: Option<bool>,

    /// When the shop was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the shop was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Shop {
    /// Resource name used in logs and errors.
    pub const NAME: &'static str = "Shop";

    /// Envelope key of the shop record.
    pub const KEY: &'static str = "shop";

    /// Retrieves the shop the context's access token belongs to.
    ///
    /// Sends a GET request to `/admin/api/{version}/shop.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails and
    /// [`RestError::Decoding`] if the response carries no shop.
    pub async fn current(client: &RestClient, ctx: &RequestContext) -> Result<Self, RestError> {
        let url = client.url_builder(ctx).simple("shop")?;
        let response = client.get(ctx, Self::NAME, &url).await?;
        envelope::decode(&response.body, Self::KEY, Self::NAME, &url)
    }
}
