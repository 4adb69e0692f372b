use crate::helpers::{RecordingPage, client_for, config, unreachable_base_url};

use storefront_client::error::{StorefrontClientError, SubmitError};
use storefront_client::page::SubmitEvent;
use storefront_client::product::{ProductForm, ProductSubmitHandler};
use storefront_client::storage::MemoryCredentialStore;

use common::RedactedToken;

use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn handler_for(base_url: &str) -> ProductSubmitHandler {
    ProductSubmitHandler::new(client_for(base_url), &config())
}

/// **VALUE**: Core contract of the product form: one POST, exact body, raw token header.
///
/// **BUG THIS CATCHES**: Would catch a `Bearer ` prefix sneaking into the header, a
/// renamed body field, or a duplicate request.
#[tokio::test]
async fn given_stored_token_when_product_submitted_then_posts_once_with_token_and_body() {
    // GIVEN: A backend expecting exactly one well-formed add-product call
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "tok-123"))
        .and(body_json(json!({
            "product_name": "Lamp",
            "product_price": 24.9,
            "product_description": "Desk lamp"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Ürün başarıyla eklendi"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new("tok-123"));
    let page = RecordingPage::new();
    let mut event = SubmitEvent::new();

    // WHEN: Submitting the form
    let result = handler
        .submit(
            &mut event,
            &ProductForm::new("Lamp", "24.9", "Desk lamp"),
            &store,
            &page,
        )
        .await;

    // THEN: Success is reported with the static message
    let reply = result.unwrap();
    assert_eq!(reply.status.0, 201);
    assert!(event.default_prevented());
    assert_eq!(page.alerts(), vec!["Product added!".to_string()]);
}

#[tokio::test]
async fn given_no_stored_token_when_product_submitted_then_sends_nothing_and_asks_for_login() {
    // GIVEN: A backend that must not be called
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::new();
    let page = RecordingPage::new();
    let mut event = SubmitEvent::new();

    // WHEN: Submitting
    let result = handler
        .submit(&mut event, &ProductForm::new("Lamp", "1", "x"), &store, &page)
        .await;

    // THEN: Missing credential, no request, login prompt shown
    assert!(matches!(result, Err(SubmitError::MissingCredential { .. })));
    assert!(event.default_prevented());
    assert_eq!(
        page.alerts(),
        vec!["Please log in before adding a product.".to_string()]
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_empty_stored_token_when_product_submitted_then_treated_as_missing() {
    let server = MockServer::start().await;
    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new(""));
    let page = RecordingPage::new();

    let result = handler
        .submit(&mut SubmitEvent::new(), &ProductForm::default(), &store, &page)
        .await;

    assert!(matches!(result, Err(SubmitError::MissingCredential { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Any resolved JSON reply counts as added, even an error status.
///
/// **WHY THIS MATTERS**: The product form does not distinguish application failures.
/// A 403 with a JSON body still shows the static notification.
#[tokio::test]
async fn given_rejecting_backend_with_json_body_when_product_submitted_then_still_reports_added() {
    // GIVEN: Backend rejecting the token with a JSON message
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Geçersiz token!"})))
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new("expired"));
    let page = RecordingPage::new();

    // WHEN: Submitting
    let reply = handler
        .submit(&mut SubmitEvent::new(), &ProductForm::new("Lamp", "5", ""), &store, &page)
        .await
        .unwrap();

    // THEN: Status is surfaced to the caller, user sees the static notification
    assert_eq!(reply.status.0, 403);
    assert_eq!(page.alerts(), vec!["Product added!".to_string()]);
}

#[tokio::test]
async fn given_non_json_reply_when_product_submitted_then_reports_failure() {
    // GIVEN: Backend answering with an HTML page
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new("tok"));
    let page = RecordingPage::new();

    // WHEN: Submitting
    let result = handler
        .submit(&mut SubmitEvent::new(), &ProductForm::new("Lamp", "5", ""), &store, &page)
        .await;

    // THEN: Generic failure
    assert!(matches!(result, Err(SubmitError::Client(_))));
    assert_eq!(page.alerts(), vec!["Error adding product".to_string()]);
}

#[tokio::test]
async fn given_unreachable_backend_when_product_submitted_then_reports_failure() {
    // GIVEN: Nothing listening
    let handler = handler_for(&unreachable_base_url());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new("tok"));
    let page = RecordingPage::new();

    // WHEN: Submitting
    let result = handler
        .submit(&mut SubmitEvent::new(), &ProductForm::new("Lamp", "5", ""), &store, &page)
        .await;

    // THEN: Transport failure, generic notification, no navigation
    assert!(matches!(
        result,
        Err(SubmitError::Client(StorefrontClientError::Http { .. }))
    ));
    assert_eq!(page.alerts(), vec!["Error adding product".to_string()]);
    assert!(page.navigations().is_empty());
}

#[tokio::test]
async fn given_unparsable_price_when_product_submitted_then_sends_null_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .and(body_json(json!({
            "product_name": "Lamp",
            "product_price": null,
            "product_description": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let store = MemoryCredentialStore::with_item("token", RedactedToken::new("tok"));
    let page = RecordingPage::new();

    let result = handler
        .submit(&mut SubmitEvent::new(), &ProductForm::new("Lamp", "free", ""), &store, &page)
        .await;

    assert!(result.is_ok());
}
