//! Recurring application charge resource implementation.
//!
//! Billing for apps follows three steps: create a charge, send the merchant
//! to its `confirmation_url`, then [`activate`](RecurringApplicationCharge::activate)
//! it once accepted. Listing uses since-id pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::RecurringApplicationCharge;
//! use shopify_rest::rest::RestResource;
//!
//! let charge = RecurringApplicationCharge {
//!     name: Some("Super Duper Plan".to_string()),
//!     price: Some("10.00".to_string()),
//!     return_url: Some("https://app.example.com/billing/return".to_string()),
//!     test: Some(true),
//!     ..Default::default()
//! };
//! let pending = charge.create(&client, &ctx).await?;
//! println!("confirm at {}", pending.confirmation_url.as_deref().unwrap_or(""));
//!
//! // after the merchant accepts
//! let active = pending.activate(&client, &ctx).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::RequestContext;
use crate::clients::{HttpMethod, RestClient, RestError};
use crate::error::ConfigError;
use crate::rest::envelope;
use crate::rest::pagination::{ListParams, PaginationStrategy};
use crate::rest::path::{ResourceOperation, ResourcePath};
use crate::rest::resource::{ListableResource, RestResource};

/// A subscription charge billed to the merchant every 30 days.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationCharge {
    /// The unique identifier of the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the plan shown to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The monthly price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Where the merchant is sent after accepting or declining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Where the merchant accepts or declines the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,

    /// `pending`, `accepted`, `active`, `declined`, `expired`, `frozen` or
    /// `cancelled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the charge is a test charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

impl RestResource for RecurringApplicationCharge {
    const NAME: &'static str = "RecurringApplicationCharge";
    const KEY: &'static str = "recurring_application_charge";
    const PLURAL: &'static str = "recurring_application_charges";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            "recurring_application_charges/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            "recurring_application_charges",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            "recurring_application_charges",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "recurring_application_charges/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action,
            "recurring_application_charges/{id}/activate",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ListableResource for RecurringApplicationCharge {
    type ListParams = RecurringApplicationChargeListParams;

    const PAGINATION: PaginationStrategy = PaginationStrategy::SinceId;
}

impl RecurringApplicationCharge {
    /// Activates an accepted charge and returns it as the server reports it.
    ///
    /// Sends a POST request to
    /// `/admin/api/{version}/recurring_application_charges/{id}/activate.json`
    /// with the charge as body.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the charge has no id,
    /// and [`RestError::Http`] if the server rejects the activation.
    pub async fn activate(
        &self,
        client: &RestClient,
        ctx: &RequestContext,
    ) -> Result<Self, RestError> {
        let id = self
            .id
            .ok_or(ConfigError::MissingRequiredField { field: "id" })?;
        let url = Self::build_url(client, ctx, ResourceOperation::Action, Some(id))?;
        let body = envelope::encode(self, Self::KEY)?;
        let response = client.post(ctx, Self::NAME, &url, body).await?;
        envelope::decode(&response.body, Self::KEY, Self::NAME, &url)
    }
}

/// Parameters for listing recurring application charges.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationChargeListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Fields to include in the response, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Follow since-id pages until a short page is returned.
    #[serde(skip)]
    pub fetch_all: bool,
}

impl ListParams for RecurringApplicationChargeListParams {
    fn limit(&self) -> Option<u32> {
        None
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ErrorKind;
    use crate::config::ShopifyConfig;
    use crate::rest::path::get_path;

    #[test]
    fn test_activate_path() {
        let path = get_path(RecurringApplicationCharge::PATHS, ResourceOperation::Action).unwrap();
        assert_eq!(path.http_method, HttpMethod::Post);
        assert_eq!(path.template, "recurring_application_charges/{id}/activate");
    }

    #[test]
    fn test_charge_body_keeps_id_for_activation() {
        let charge = RecurringApplicationCharge {
            id: Some(455696195),
            status: Some("accepted".to_string()),
            ..Default::default()
        };

        let body = envelope::encode(&charge, RecurringApplicationCharge::KEY).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "recurring_application_charge": {"id": 455696195, "status": "accepted"}
            })
        );
    }

    #[tokio::test]
    async fn test_activate_without_id_fails_before_any_request() {
        let client = RestClient::new(ShopifyConfig::default()).unwrap();
        let ctx = RequestContext::new("test-shop", "token").unwrap();

        let error = RecurringApplicationCharge::default()
            .activate(&client, &ctx)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(matches!(
            error,
            RestError::Config(ConfigError::MissingRequiredField { field: "id" })
        ));
    }

    #[test]
    fn test_list_params_have_no_limit() {
        let params = RecurringApplicationChargeListParams {
            fetch_all: true,
            ..Default::default()
        };
        assert_eq!(params.limit(), None);
        assert!(params.fetch_all());
    }
}
