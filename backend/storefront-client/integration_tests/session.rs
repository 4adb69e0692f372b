use crate::helpers::{RecordingPage, client_for, config};

use storefront_client::error::{StorefrontClientError, SubmitError};
use storefront_client::page::{CredentialStore, SubmitEvent};
use storefront_client::product::{ProductForm, ProductSubmitHandler};
use storefront_client::session::{LoginPayload, SessionHandler};
use storefront_client::storage::FileCredentialStore;

use common::RedactedToken;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Login feeds the product form. After a login, the product form sends the
/// token the backend issued.
///
/// **BUG THIS CATCHES**: Would catch login storing under a different key than the
/// product form reads, which leaves the product form asking for a login forever.
#[tokio::test]
async fn given_successful_login_when_product_submitted_then_uses_issued_token() {
    // GIVEN: Backend issuing a token and accepting products with it
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "ayse", "password": "gizli"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Giriş başarılı", "token": "jwt-xyz"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .and(header("Authorization", "jwt-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("local_storage.json"));
    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());
    let products = ProductSubmitHandler::new(client_for(&server.uri()), &config());

    // WHEN: Logging in, then submitting a product
    session
        .login(
            &mut SubmitEvent::new(),
            &LoginPayload::new("ayse", "gizli"),
            &store,
            &page,
        )
        .await
        .unwrap();
    products
        .submit(&mut SubmitEvent::new(), &ProductForm::new("Çay", "12", "Rize"), &store, &page)
        .await
        .unwrap();

    // THEN: Token persisted and both notifications shown
    assert_eq!(store.get_item("token").unwrap().unwrap().as_str(), "jwt-xyz");
    assert_eq!(
        page.alerts(),
        vec!["Giriş başarılı".to_string(), "Product added!".to_string()]
    );
}

#[tokio::test]
async fn given_wrong_password_when_login_submitted_then_shows_server_message_and_stores_nothing() {
    // GIVEN: Backend rejecting credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Kullanıcı adı veya şifre hatalı"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("local_storage.json"));
    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());

    // WHEN: Logging in
    let result = session
        .login(&mut SubmitEvent::new(), &LoginPayload::new("ayse", "yanlis"), &store, &page)
        .await;

    // THEN: Server error surfaced, nothing stored
    match result {
        Err(SubmitError::Client(StorefrontClientError::Server { status, message, .. })) => {
            assert_eq!(status.0, 401);
            assert_eq!(message, "Kullanıcı adı veya şifre hatalı");
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert_eq!(page.alerts(), vec!["Kullanıcı adı veya şifre hatalı".to_string()]);
    assert!(store.get_item("token").unwrap().is_none());
}

/// **BUG THIS CATCHES**: Would catch a server failure without a message leaving the user
/// with an empty alert, or a stale token being kept from the failed attempt.
#[tokio::test]
async fn given_server_failure_without_message_when_login_submitted_then_shows_configured_failure() {
    // GIVEN: Backend failing with an empty JSON object
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("local_storage.json"));
    let page = RecordingPage::new();
    let config = config();
    let session = SessionHandler::new(client_for(&server.uri()), &config);

    // WHEN: Logging in
    let result = session
        .login(&mut SubmitEvent::new(), &LoginPayload::new("ayse", "sifre"), &store, &page)
        .await;

    // THEN: Server status surfaced, configured failure message shown
    match result {
        Err(SubmitError::Client(StorefrontClientError::Server { status, .. })) => {
            assert!(status.is_server_error());
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert_eq!(page.alerts(), vec![config.messages.login_failed.clone()]);
    assert!(store.get_item("token").unwrap().is_none());
}

#[tokio::test]
async fn given_login_reply_without_token_when_submitted_then_reports_malformed_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Giriş başarılı"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("local_storage.json"));
    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());

    let result = session
        .login(&mut SubmitEvent::new(), &LoginPayload::new("ayse", "gizli"), &store, &page)
        .await;

    assert!(matches!(
        result,
        Err(SubmitError::Client(StorefrontClientError::MalformedReply { .. }))
    ));
    assert_eq!(
        page.alerts(),
        vec!["Giriş yapılamadı. Lütfen tekrar deneyin.".to_string()]
    );
}

#[tokio::test]
async fn given_stored_token_when_logged_out_then_token_removed_and_navigates_to_login() {
    // GIVEN: A stored token and a backend that is never called
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("local_storage.json"));
    store.set_item("token", &RedactedToken::new("jwt-xyz")).unwrap();
    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());

    // WHEN: Logging out
    session.logout(&store, &page, &page).unwrap();

    // THEN: Token gone, redirected, no network traffic
    assert!(store.get_item("token").unwrap().is_none());
    assert_eq!(page.navigations(), vec!["/login".to_string()]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_email_when_reset_link_requested_then_posts_form_and_shows_message() {
    // GIVEN: Backend accepting a form-encoded email
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forget_password"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("email=ayse%40example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Sifre sifirlama linki e-posta adresinize gonderildi."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());

    // WHEN: Requesting a link
    let reply = session
        .forgot_password(&mut SubmitEvent::new(), "ayse@example.com", &page)
        .await
        .unwrap();

    // THEN: Message shown verbatim
    assert!(reply.status.is_success());
    assert_eq!(
        page.alerts(),
        vec!["Sifre sifirlama linki e-posta adresinize gonderildi.".to_string()]
    );
}

#[tokio::test]
async fn given_unknown_email_when_reset_link_requested_then_shows_not_found_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forget_password"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "Bu e-posta adresine ait kullanici bulunamadı"})),
        )
        .mount(&server)
        .await;

    let page = RecordingPage::new();
    let session = SessionHandler::new(client_for(&server.uri()), &config());

    let reply = session
        .forgot_password(&mut SubmitEvent::new(), "nobody@example.com", &page)
        .await
        .unwrap();

    assert_eq!(reply.status.0, 404);
    assert_eq!(
        page.alerts(),
        vec!["Bu e-posta adresine ait kullanici bulunamadı".to_string()]
    );
}
