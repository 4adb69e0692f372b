// Unit tests for password reset token extraction and outcome classification

use crate::StorefrontClient;
use crate::page::PageLocation;
use crate::password_reset::{PasswordResetForm, PasswordResetPayload, ResetStatus, ResetToken};

use common::HttpStatusCode;

const MARKER: &str = "başarıyla";

#[test]
fn given_page_with_token_when_extracted_then_returns_token() {
    // GIVEN: A reset page URL as sent in the e-mail
    let location = PageLocation::parse("http://shop.local/reset-password?token=abc123").unwrap();

    // WHEN: Extracting the token
    let token = ResetToken::from_location(&location);

    // THEN: Token is present with the query value
    assert_eq!(token.map(|t| t.as_str().to_string()).as_deref(), Some("abc123"));
}

#[test]
fn given_page_without_or_with_empty_token_when_extracted_then_returns_none() {
    let without = PageLocation::parse("http://shop.local/reset-password").unwrap();
    let empty = PageLocation::parse("http://shop.local/reset-password?token=").unwrap();

    assert!(ResetToken::from_location(&without).is_none());
    assert!(ResetToken::from_location(&empty).is_none());
}

/// **VALUE**: Success requires BOTH a 2xx status and the confirmation marker.
///
/// **BUG THIS CATCHES**: Would catch a regression to marker-only matching, where an
/// error reply that happens to contain the marker sends the user to the login page.
#[test]
fn given_reply_variants_when_classified_then_status_and_marker_both_count() {
    // GIVEN / WHEN / THEN
    assert_eq!(
        ResetStatus::classify(HttpStatusCode(200), "Şifreniz başarıyla güncellendi.", MARKER),
        ResetStatus::Succeeded
    );
    assert_eq!(
        ResetStatus::classify(HttpStatusCode(200), "some other text", MARKER),
        ResetStatus::Unconfirmed
    );
    assert_eq!(
        ResetStatus::classify(HttpStatusCode(400), "Geçersiz bağlantı.", MARKER),
        ResetStatus::Rejected
    );
    assert_eq!(
        ResetStatus::classify(HttpStatusCode(500), "başarıyla ama hata", MARKER),
        ResetStatus::Rejected
    );
}

#[test]
fn given_token_with_reserved_chars_when_url_built_then_token_is_percent_encoded() {
    // GIVEN: A client and a token containing reserved characters
    let client = StorefrontClient::new("http://shop.local:5000/").unwrap();
    let token = ResetToken::new("a&b=c");

    // WHEN: Building the reset URL
    let url = client.reset_password_url(&token).unwrap();

    // THEN: Path is fixed and the token is a single encoded query value
    assert_eq!(url.path(), "/reset-password");
    assert_eq!(url.query(), Some("token=a%26b%3Dc"));
}

#[test]
fn given_password_when_debug_formatted_then_value_is_hidden() {
    let form = PasswordResetForm::new("hunter2");
    let payload = PasswordResetPayload::from(&form);

    assert!(!format!("{:?}", form).contains("hunter2"));
    assert!(!format!("{:?}", payload).contains("hunter2"));
    assert!(!format!("{:?}", ResetToken::new("abc123")).contains("abc123"));
}

#[test]
fn given_password_when_serialized_then_body_has_new_password_field() {
    let payload = PasswordResetPayload::from(&PasswordResetForm::new("yeni-sifre"));

    let json = serde_json::to_string(&payload).unwrap();

    assert_eq!(json, r#"{"new_password":"yeni-sifre"}"#);
}
