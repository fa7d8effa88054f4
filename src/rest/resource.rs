//! Capability traits for REST resources.
//!
//! [`RestResource`] gives a resource `find`, `create` and `delete`;
//! [`ListableResource`] adds `all` on top, driven by the pagination strategy
//! the resource declares. Implementors only provide names, a path table and
//! an id accessor.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpMethod;
//! use shopify_rest::rest::{ResourceOperation, ResourcePath, RestResource};
//!
//! impl RestResource for Webhook {
//!     const NAME: &'static str = "Webhook";
//!     const KEY: &'static str = "webhook";
//!     const PLURAL: &'static str = "webhooks";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "webhooks/{id}"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "webhooks"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::auth::RequestContext;
use crate::clients::{RestClient, RestError};
use crate::error::ConfigError;
use crate::rest::envelope;
use crate::rest::pagination::{
    follow_cursor, follow_since_id, ListParams, Page, PaginationStrategy,
};
use crate::rest::path::{build_path, get_path, ResourceOperation, ResourcePath};
use crate::rest::query::encode_query;
use crate::rest::url::with_query;

/// A REST resource that can be fetched, created and deleted.
///
/// Operations the resource declares no path for fail with
/// [`RestError::UnsupportedOperation`].
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The resource name used in logs and errors (e.g., "Product").
    const NAME: &'static str;

    /// The envelope key of a single record (e.g., "product").
    const KEY: &'static str;

    /// The envelope key of a list, also the URL segment (e.g., "products").
    const PLURAL: &'static str;

    /// Path templates per operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the vendor-assigned id, `None` for unsaved records.
    fn get_id(&self) -> Option<u64>;

    /// Returns the URL segment of the resource collection.
    #[must_use]
    fn resource_name() -> &'static str {
        Self::PLURAL
    }

    /// Builds the URL of `operation`, interpolating `id` where the template
    /// needs one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnsupportedOperation`] if no path is declared
    /// for `operation`, and a configuration error if the template needs an
    /// id and none is given.
    fn build_url(
        client: &RestClient,
        ctx: &RequestContext,
        operation: ResourceOperation,
        id: Option<u64>,
    ) -> Result<String, RestError> {
        let path = get_path(Self::PATHS, operation).ok_or(RestError::UnsupportedOperation {
            resource: Self::NAME,
            operation: operation.as_str(),
        })?;
        let path = build_path(path.template, id)?;
        client.url_builder(ctx).path(&path)
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns a remote error if the record does not exist, and a decoding
    /// error if the response has no record under [`KEY`](Self::KEY).
    async fn find(client: &RestClient, ctx: &RequestContext, id: u64) -> Result<Self, RestError> {
        let url = Self::build_url(client, ctx, ResourceOperation::Find, Some(id))?;
        let response = client.get(ctx, Self::NAME, &url).await?;
        envelope::decode(&response.body, Self::KEY, Self::NAME, &url)
    }

    /// Creates this record and returns the server's copy, id included.
    ///
    /// # Errors
    ///
    /// Returns a remote error carrying the server's validation messages if
    /// the record is rejected.
    async fn create(&self, client: &RestClient, ctx: &RequestContext) -> Result<Self, RestError> {
        let url = Self::build_url(client, ctx, ResourceOperation::Create, None)?;
        let body = envelope::encode(self, Self::KEY)?;
        let response = client.post(ctx, Self::NAME, &url, body).await?;
        envelope::decode(&response.body, Self::KEY, Self::NAME, &url)
    }

    /// Deletes this record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the record has no id.
    async fn delete(&self, client: &RestClient, ctx: &RequestContext) -> Result<(), RestError> {
        let id = self
            .get_id()
            .ok_or(ConfigError::MissingRequiredField { field: "id" })?;
        Self::delete_by_id(client, ctx, id).await
    }

    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns a remote error if the server refuses the deletion.
    async fn delete_by_id(
        client: &RestClient,
        ctx: &RequestContext,
        id: u64,
    ) -> Result<(), RestError> {
        let url = Self::build_url(client, ctx, ResourceOperation::Delete, Some(id))?;
        client.delete(ctx, Self::NAME, &url).await?;
        Ok(())
    }
}

/// A REST resource that can be listed.
#[allow(async_fn_in_trait)]
pub trait ListableResource: RestResource {
    /// Filter and paging options of `all`.
    type ListParams: ListParams;

    /// How `all` continues past the first page.
    const PAGINATION: PaginationStrategy;

    /// Lists records matching `params`.
    ///
    /// With [`PaginationStrategy::CursorFollow`], further pages are fetched
    /// when the context enables auto-pagination. With
    /// [`PaginationStrategy::SinceId`], they are fetched when `params` asks
    /// for every record. Records come back in server order, pages
    /// concatenated in fetch order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Encoding`] for unencodable options, and
    /// [`RestError::Pagination`] when a page fails. No partial result is
    /// returned.
    async fn all(
        client: &RestClient,
        ctx: &RequestContext,
        params: Self::ListParams,
    ) -> Result<Vec<Self>, RestError> {
        let url = Self::build_url(client, ctx, ResourceOperation::All, None)?;

        match Self::PAGINATION {
            PaginationStrategy::CursorFollow => {
                let first_url = with_query(&url, &encode_query(&params)?);
                follow_cursor(
                    Self::NAME,
                    first_url,
                    ctx.auto_paginate(),
                    move |page_url: String| async move {
                        let response = client.get(ctx, Self::NAME, &page_url).await?;
                        let items =
                            envelope::decode(&response.body, Self::PLURAL, Self::NAME, &page_url)?;
                        Ok(Page {
                            items,
                            next_url: response.next_page_url,
                        })
                    },
                )
                .await
            }
            PaginationStrategy::SinceId => {
                follow_since_id(
                    Self::NAME,
                    &url,
                    params,
                    Self::get_id,
                    move |page_url: String| async move {
                        let response = client.get(ctx, Self::NAME, &page_url).await?;
                        envelope::decode(&response.body, Self::PLURAL, Self::NAME, &page_url)
                    },
                )
                .await
            }
        }
    }
}
