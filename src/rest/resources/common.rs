//! Types shared by several resources.
//!
//! Money amounts are kept as strings so decimal precision survives the
//! round trip.

use serde::{Deserialize, Serialize};

/// A custom field attached to a resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// The name of the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// How the value is interpreted (`string`, `integer`, `json_string`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// A container grouping related metafields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// A free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An amount in a specific currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Price {
    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// The amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// A variant price in one of the shop's presentment currencies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PresentmentPrice {
    /// The selling price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// The price before a discount, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Price>,
}
