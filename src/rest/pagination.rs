//! Pagination engine for list operations.
//!
//! Two continuation strategies exist and each listable resource uses exactly
//! one of them:
//!
//! - **Cursor-follow**: the server advertises the next page as a URL in the
//!   `Link` header. The engine follows it while the request context enables
//!   auto-pagination.
//! - **Since-id**: the next page starts after the id of the last item seen.
//!   The engine continues while the caller asked for everything and pages
//!   come back full.
//!
//! Pages are fetched strictly in sequence and concatenated in fetch order.
//! A failing page fails the whole operation; pages fetched before it are
//! dropped and the error names the page and its cursor.

use std::collections::HashSet;
use std::future::Future;

use serde::Serialize;

use crate::clients::RestError;
use crate::rest::query::encode_query;
use crate::rest::url::with_query;

/// Page size assumed when the caller sets no `limit`.
pub const DEFAULT_PAGE_THRESHOLD: usize = 50;

/// How a listable resource continues past its first page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// Follow the next-page URL of the `Link` header.
    CursorFollow,
    /// Request items with ids above the last one seen.
    SinceId,
}

/// Options record of a list operation.
///
/// The record serializes to the query string of the first page. Since-id
/// pagination updates the watermark through
/// [`set_since_id`](Self::set_since_id) before each further page.
pub trait ListParams: Serialize + Clone + Send + Sync {
    /// Returns the requested page size.
    #[must_use]
    fn limit(&self) -> Option<u32>;

    /// Returns the current since-id watermark.
    #[must_use]
    fn since_id(&self) -> Option<u64> {
        None
    }

    /// Moves the since-id watermark.
    fn set_since_id(&mut self, _since_id: u64) {}

    /// Returns whether since-id pagination should fetch every page.
    #[must_use]
    fn fetch_all(&self) -> bool {
        false
    }
}

impl ListParams for () {
    fn limit(&self) -> Option<u32> {
        None
    }
}

/// One page of a cursor-paginated listing.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// The items of the page, in server order.
    pub items: Vec<T>,
    /// The next-page URL the server advertised, if any.
    pub next_url: Option<String>,
}

/// Returns the page size at or above which a since-id page counts as full.
///
/// This is the caller's `limit`, or [`DEFAULT_PAGE_THRESHOLD`] when no
/// positive limit is set.
#[must_use]
pub fn page_threshold(limit: Option<u32>) -> usize {
    limit
        .filter(|l| *l > 0)
        .map_or(DEFAULT_PAGE_THRESHOLD, |l| l as usize)
}

/// Fetches `first_url` and, when `auto_paginate` is set, every page its
/// `Link` headers lead to.
///
/// A next-page URL that was already fetched ends the sequence.
///
/// # Errors
///
/// Returns [`RestError::Pagination`] wrapping the first page failure.
pub async fn follow_cursor<T, F, Fut>(
    resource: &'static str,
    first_url: String,
    auto_paginate: bool,
    mut fetch: F,
) -> Result<Vec<T>, RestError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, RestError>>,
{
    let mut results = Vec::new();
    let mut seen = HashSet::new();
    let mut url = first_url;
    let mut page = 1;

    loop {
        seen.insert(url.clone());

        let fetched = fetch(url.clone())
            .await
            .map_err(|e| page_error(resource, page, url.clone(), e))?;

        tracing::debug!(
            resource,
            page,
            items = fetched.items.len(),
            "Fetched page by cursor"
        );
        results.extend(fetched.items);

        match fetched.next_url {
            Some(next) if auto_paginate => {
                if seen.contains(&next) {
                    tracing::warn!(resource, url = %next, "Next-page cursor repeats; stopping");
                    break;
                }
                url = next;
                page += 1;
            }
            _ => break,
        }
    }

    Ok(results)
}

/// Fetches `base_url` with `params` and, when the caller asked for every
/// page, continues from the id of each full page's last item.
///
/// A page is full when it holds at least [`page_threshold`] items. The
/// sequence also ends on an empty page, on a last item without an id, or
/// when the watermark would not increase. A continuation page whose last id
/// does not exceed the watermark repeats earlier items and is dropped.
///
/// # Errors
///
/// Returns [`RestError::Encoding`] if `params` cannot be encoded, and
/// [`RestError::Pagination`] wrapping the first page failure.
pub async fn follow_since_id<T, P, I, F, Fut>(
    resource: &'static str,
    base_url: &str,
    mut params: P,
    id_of: I,
    mut fetch: F,
) -> Result<Vec<T>, RestError>
where
    P: ListParams,
    I: Fn(&T) -> Option<u64>,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<T>, RestError>>,
{
    let threshold = page_threshold(params.limit());
    let fetch_all = params.fetch_all();
    let mut watermark = params.since_id();
    let mut results = Vec::new();
    let mut page = 1;

    loop {
        let url = with_query(base_url, &encode_query(&params)?);
        let cursor = format!("since_id={}", watermark.unwrap_or_default());

        let items = fetch(url)
            .await
            .map_err(|e| page_error(resource, page, cursor, e))?;

        let count = items.len();
        let last_id = items.last().and_then(&id_of);
        tracing::debug!(resource, page, items = count, ?watermark, "Fetched page by since_id");

        let stalled = matches!((last_id, watermark), (Some(last), Some(w)) if last <= w);
        if stalled && page > 1 {
            tracing::warn!(resource, page, "since_id did not increase; dropping page");
            break;
        }
        results.extend(items);

        if !fetch_all || count == 0 || count < threshold {
            break;
        }

        let Some(last_id) = last_id else {
            tracing::warn!(resource, page, "Full page has no last id; stopping");
            break;
        };
        if stalled {
            tracing::warn!(resource, page, last_id, "Watermark did not increase");
            break;
        }

        watermark = Some(last_id);
        params.set_since_id(last_id);
        page += 1;
    }

    Ok(results)
}

fn page_error(
    resource: &'static str,
    page: usize,
    cursor: String,
    source: RestError,
) -> RestError {
    RestError::Pagination {
        resource,
        page,
        cursor,
        source: Box::new(source),
    }
}
