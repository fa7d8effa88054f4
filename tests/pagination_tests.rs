//! Integration tests for list operations.
//!
//! Cursor-follow resources (webhooks, script tags) are driven by `Link`
//! headers; since-id resources (products, collects) by the id of the last
//! item of each page. Call counts are asserted on the mock server.

use std::time::Duration;

use shopify_rest::rest::resources::{
    CollectListParams, Collect, Product, ProductListParams, ScriptTag, ScriptTagListParams,
    Webhook, WebhookListParams,
};
use shopify_rest::rest::ListableResource;
use shopify_rest::{
    CancelHandle, ErrorKind, HostUrl, RequestContext, RestClient, RestError, ShopifyConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const WEBHOOKS: &str = "/admin/api/2020-10/webhooks.json";
const PRODUCTS: &str = "/admin/api/2020-10/products.json";

/// Matches requests whose query string has no parameter of the given name.
struct QueryParamAbsent(&'static str);

impl Match for QueryParamAbsent {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

fn client_for(server: &MockServer) -> RestClient {
    let config = ShopifyConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(config).unwrap()
}

fn context() -> RequestContext {
    RequestContext::new("test-shop", "test-token").unwrap()
}

fn next_link(server: &MockServer, page_info: &str) -> String {
    format!(
        r#"<{}{WEBHOOKS}?page_info={page_info}&limit=2>; rel="next""#,
        server.uri()
    )
}

fn webhooks(ids: &[u64]) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "topic": "products/create"}))
        .collect();
    serde_json::json!({ "webhooks": items })
}

fn products(ids: impl IntoIterator<Item = u64>) -> serde_json::Value {
    let items: Vec<_> = ids
        .into_iter()
        .map(|id| serde_json::json!({"id": id, "title": format!("Product {id}")}))
        .collect();
    serde_json::json!({ "products": items })
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> Option<u64>) -> Vec<u64> {
    items.iter().filter_map(id).collect()
}

/// Mounts a first webhook page linking to `page_info=abc`.
async fn mount_first_webhook_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(WEBHOOKS))
        .and(query_param("limit", "2"))
        .and(QueryParamAbsent("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(server, "abc").as_str())
                .set_body_json(webhooks(&[1, 2])),
        )
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Cursor-follow Tests
// ============================================================================

#[tokio::test]
async fn test_cursor_follow_concatenates_two_pages_in_two_calls() {
    let server = MockServer::start().await;
    mount_first_webhook_page(&server).await;

    Mock::given(method("GET"))
        .and(path(WEBHOOKS))
        .and(query_param("page_info", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webhooks(&[3])))
        .expect(1)
        .mount(&server)
        .await;

    let params = WebhookListParams {
        limit: Some(2),
        ..Default::default()
    };
    let ctx = context().with_auto_paginate(true);

    let result = Webhook::all(&client_for(&server), &ctx, params)
        .await
        .unwrap();

    assert_eq!(ids(&result, |w| w.id), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_cursor_follow_without_auto_paginate_fetches_first_page_only() {
    let server = MockServer::start().await;
    mount_first_webhook_page(&server).await;

    Mock::given(method("GET"))
        .and(query_param("page_info", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webhooks(&[3])))
        .expect(0)
        .mount(&server)
        .await;

    let params = WebhookListParams {
        limit: Some(2),
        ..Default::default()
    };

    let result = Webhook::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(ids(&result, |w| w.id), vec![1, 2]);
}

#[tokio::test]
async fn test_repeated_cursor_terminates() {
    let server = MockServer::start().await;
    let self_link = format!(
        r#"<{}/admin/api/2020-10/script_tags.json?page_info=loop>; rel="next""#,
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/admin/api/2020-10/script_tags.json"))
        .and(QueryParamAbsent("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", self_link.as_str())
                .set_body_json(serde_json::json!({"script_tags": [{"id": 1}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page_info", "loop"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", self_link.as_str())
                .set_body_json(serde_json::json!({"script_tags": [{"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context().with_auto_paginate(true);
    let result = ScriptTag::all(&client_for(&server), &ctx, ScriptTagListParams::default())
        .await
        .unwrap();

    assert_eq!(ids(&result, |t| t.id), vec![1, 2]);
}

#[tokio::test]
async fn test_failing_second_page_discards_first_page() {
    let server = MockServer::start().await;
    mount_first_webhook_page(&server).await;

    Mock::given(method("GET"))
        .and(query_param("page_info", "abc"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let params = WebhookListParams {
        limit: Some(2),
        ..Default::default()
    };
    let ctx = context().with_auto_paginate(true);

    let error = Webhook::all(&client_for(&server), &ctx, params)
        .await
        .unwrap_err();

    match &error {
        RestError::Pagination {
            resource,
            page,
            cursor,
            ..
        } => {
            assert_eq!(*resource, "Webhook");
            assert_eq!(*page, 2);
            assert!(cursor.contains("page_info=abc"));
        }
        other => panic!("expected a pagination error, got {other:?}"),
    }
    assert_eq!(error.kind(), ErrorKind::Remote);
    assert_eq!(error.remote_body(), Some("Internal Server Error"));
}

#[tokio::test]
async fn test_filter_options_are_sent_on_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEBHOOKS))
        .and(query_param("topic", "app/uninstalled"))
        .and(query_param("address", "https://example.com/hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(webhooks(&[7])))
        .expect(1)
        .mount(&server)
        .await;

    let params = WebhookListParams {
        topic: Some("app/uninstalled".to_string()),
        address: Some("https://example.com/hooks".to_string()),
        ..Default::default()
    };

    let result = Webhook::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(ids(&result, |w| w.id), vec![7]);
}

// ============================================================================
// Since-id Tests
// ============================================================================

#[tokio::test]
async fn test_since_id_full_page_requests_next_page_from_last_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("limit", "3"))
        .and(QueryParamAbsent("since_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([10, 11, 12])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("limit", "3"))
        .and(query_param("since_id", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([13])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductListParams {
        limit: Some(3),
        fetch_all: true,
        ..Default::default()
    };

    let result = Product::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(ids(&result, |p| p.id), vec![10, 11, 12, 13]);
}

#[tokio::test]
async fn test_since_id_short_page_issues_no_second_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([1, 2])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductListParams {
        limit: Some(3),
        fetch_all: true,
        ..Default::default()
    };

    let result = Product::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_since_id_default_threshold_is_fifty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2020-10/collects.json"))
        .and(QueryParamAbsent("since_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "collects": (1..=50).map(|id| serde_json::json!({"id": id})).collect::<Vec<_>>()
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2020-10/collects.json"))
        .and(query_param("since_id", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"collects": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = CollectListParams {
        fetch_all: true,
        ..Default::default()
    };

    let result = Collect::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(result.len(), 50);
}

#[tokio::test]
async fn test_since_id_without_fetch_all_stops_after_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([1, 2, 3])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductListParams {
        limit: Some(3),
        ..Default::default()
    };

    let result = Product::all(&client_for(&server), &context(), params)
        .await
        .unwrap();

    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn test_since_id_failure_reports_watermark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(QueryParamAbsent("since_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([1, 2])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("since_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"products": "oops"}"#))
        .mount(&server)
        .await;

    let params = ProductListParams {
        limit: Some(2),
        fetch_all: true,
        ..Default::default()
    };

    let error = Product::all(&client_for(&server), &context(), params)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Decoding);
    assert!(matches!(
        &error,
        RestError::Pagination { page: 2, cursor, .. } if cursor == "since_id=2"
    ));
}

// ============================================================================
// Cancellation Tests
// ============================================================================

#[tokio::test]
async fn test_cancel_during_second_page_returns_cancelled_without_pages() {
    let server = MockServer::start().await;
    mount_first_webhook_page(&server).await;

    Mock::given(method("GET"))
        .and(query_param("page_info", "abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(webhooks(&[3]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cancel = CancelHandle::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.cancel();
    });

    let params = WebhookListParams {
        limit: Some(2),
        ..Default::default()
    };
    let ctx = context()
        .with_auto_paginate(true)
        .with_cancel_handle(cancel);

    let error = Webhook::all(&client_for(&server), &ctx, params)
        .await
        .unwrap_err();

    assert!(error.is_cancelled());
    assert_eq!(error.kind(), ErrorKind::Cancelled);
}

#[tokio::test]
async fn test_cancelled_context_fetches_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products([1])))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancelHandle::new();
    cancel.cancel();
    let ctx = context().with_cancel_handle(cancel);

    let error = Product::all(&client_for(&server), &ctx, ProductListParams::default())
        .await
        .unwrap_err();

    assert!(error.is_cancelled());
    assert!(matches!(error, RestError::Pagination { page: 1, .. }));
}
