use crate::helpers::{RecordingPage, client_for, config, unreachable_base_url};

use storefront_client::error::{StorefrontClientError, SubmitError};
use storefront_client::page::{PageLocation, SubmitEvent};
use storefront_client::password_reset::{
    PasswordResetForm, PasswordResetHandler, ResetStatus, ResetToken,
};

use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUCCESS_MESSAGE: &str = "Şifreniz başarıyla güncellendi.";
const GENERIC_FAILURE: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

fn handler_for(base_url: &str) -> PasswordResetHandler {
    PasswordResetHandler::new(client_for(base_url), &config())
}

fn token_from_page(server: &MockServer) -> Option<ResetToken> {
    let location =
        PageLocation::parse(&format!("{}/reset-password?token=abc123", server.uri())).unwrap();
    ResetToken::from_location(&location)
}

async fn mount_reply(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/reset-password"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// **VALUE**: The token from the page URL ends up in the request URL, the password in the body.
///
/// **BUG THIS CATCHES**: Would catch the token moving into a header or the body, or the
/// password field being renamed.
#[tokio::test]
async fn given_page_token_when_password_submitted_then_posts_once_with_token_query_and_body() {
    // GIVEN: Backend expecting one reset call for token abc123
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset-password"))
        .and(query_param("token", "abc123"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"new_password": "yeni-sifre"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": SUCCESS_MESSAGE})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server.uri());
    let token = token_from_page(&server);
    let page = RecordingPage::new();
    let mut event = SubmitEvent::new();

    // WHEN: Submitting the reset form
    let outcome = handler
        .submit(
            &mut event,
            token.as_ref(),
            &PasswordResetForm::new("yeni-sifre"),
            &page,
            &page,
        )
        .await
        .unwrap();

    // THEN: Exactly one request with the token as the only query value
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("token=abc123"));
    assert!(event.default_prevented());
    assert_eq!(outcome.status, ResetStatus::Succeeded);
}

#[tokio::test]
async fn given_success_message_when_password_submitted_then_shows_it_and_navigates_to_login() {
    // GIVEN: Backend confirming the change
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"message": SUCCESS_MESSAGE})).await;
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    // WHEN: Submitting
    handler
        .submit(
            &mut SubmitEvent::new(),
            token_from_page(&server).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await
        .unwrap();

    // THEN: Message shown verbatim, then redirect
    assert_eq!(page.alerts(), vec![SUCCESS_MESSAGE.to_string()]);
    assert_eq!(page.navigations(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn given_other_message_when_password_submitted_then_shows_it_and_stays() {
    // GIVEN: Backend answering 200 without confirmation
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"message": "some other text"})).await;
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    // WHEN: Submitting
    let outcome = handler
        .submit(
            &mut SubmitEvent::new(),
            token_from_page(&server).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await
        .unwrap();

    // THEN: Verbatim message, no navigation
    assert_eq!(outcome.status, ResetStatus::Unconfirmed);
    assert_eq!(outcome.message, "some other text");
    assert_eq!(page.alerts(), vec!["some other text".to_string()]);
    assert!(page.navigations().is_empty());
}

/// **VALUE**: An expired link is shown to the user but never redirects.
///
/// **WHY THIS MATTERS**: The success decision rests on the HTTP status as well as the
/// message, so an error reply quoting the marker cannot send the user to login.
#[tokio::test]
async fn given_rejected_reply_when_password_submitted_then_shows_message_without_navigation() {
    // GIVEN: 400 with a message that even contains the marker
    let server = MockServer::start().await;
    mount_reply(
        &server,
        400,
        json!({"message": "Bağlantı başarıyla doğrulanamadı."}),
    )
    .await;
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    // WHEN: Submitting
    let outcome = handler
        .submit(
            &mut SubmitEvent::new(),
            token_from_page(&server).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await
        .unwrap();

    // THEN: Rejected, message shown, no redirect
    assert_eq!(outcome.status, ResetStatus::Rejected);
    assert_eq!(outcome.http_status.0, 400);
    assert_eq!(page.alerts().len(), 1);
    assert!(page.navigations().is_empty());
}

/// **BUG THIS CATCHES**: Would catch a server failure with a message being treated as
/// malformed, or being shown as a generic failure instead of the server's text.
#[tokio::test]
async fn given_server_error_reply_when_password_submitted_then_shows_message_without_navigation() {
    // GIVEN: 500 with a message
    let server = MockServer::start().await;
    mount_reply(&server, 500, json!({"message": "Sunucu hatası."})).await;
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    // WHEN: Submitting
    let outcome = handler
        .submit(
            &mut SubmitEvent::new(),
            token_from_page(&server).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await
        .unwrap();

    // THEN: Rejected with the server status, its message shown verbatim
    assert_eq!(outcome.status, ResetStatus::Rejected);
    assert!(outcome.http_status.is_server_error());
    assert_eq!(page.alerts(), vec!["Sunucu hatası.".to_string()]);
    assert!(page.navigations().is_empty());
}

#[tokio::test]
async fn given_reply_without_message_when_password_submitted_then_reports_generic_failure() {
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"status": "ok"})).await;
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    let result = handler
        .submit(
            &mut SubmitEvent::new(),
            token_from_page(&server).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await;

    assert!(matches!(
        result,
        Err(SubmitError::Client(StorefrontClientError::MalformedReply { .. }))
    ));
    assert_eq!(page.alerts(), vec![GENERIC_FAILURE.to_string()]);
    assert!(page.navigations().is_empty());
}

#[tokio::test]
async fn given_unreachable_backend_when_password_submitted_then_reports_generic_failure() {
    // GIVEN: Nothing listening
    let handler = handler_for(&unreachable_base_url());
    let page = RecordingPage::new();
    let token = ResetToken::new("abc123");

    // WHEN: Submitting
    let result = handler
        .submit(
            &mut SubmitEvent::new(),
            Some(&token),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await;

    // THEN: Generic localized failure, no navigation
    assert!(matches!(result, Err(SubmitError::Client(_))));
    assert_eq!(page.alerts(), vec![GENERIC_FAILURE.to_string()]);
    assert!(page.navigations().is_empty());
}

#[tokio::test]
async fn given_page_without_token_when_password_submitted_then_sends_nothing() {
    // GIVEN: A reset page opened without the token parameter
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let location = PageLocation::parse(&format!("{}/reset-password", server.uri())).unwrap();
    let handler = handler_for(&server.uri());
    let page = RecordingPage::new();

    // WHEN: Submitting
    let result = handler
        .submit(
            &mut SubmitEvent::new(),
            ResetToken::from_location(&location).as_ref(),
            &PasswordResetForm::new("x"),
            &page,
            &page,
        )
        .await;

    // THEN: Invalid-link notice, zero requests
    assert!(matches!(result, Err(SubmitError::MissingCredential { .. })));
    assert_eq!(page.alerts(), vec!["Geçersiz bağlantı.".to_string()]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_same_token_when_submitted_twice_then_both_requests_carry_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset-password"))
        .and(query_param("token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "tekrar deneyin"})))
        .expect(2)
        .mount(&server)
        .await;
    let handler = handler_for(&server.uri());
    let token = token_from_page(&server);
    let page = RecordingPage::new();

    for password in ["first", "second"] {
        handler
            .submit(
                &mut SubmitEvent::new(),
                token.as_ref(),
                &PasswordResetForm::new(password),
                &page,
                &page,
            )
            .await
            .unwrap();
    }

    assert_eq!(page.alerts().len(), 2);
}
