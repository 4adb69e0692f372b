use storefront_client::error::{CoreError, StorefrontClientError, SubmitError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies that client errors carry their raise location in the message.
///
/// **WHY THIS MATTERS**: Submission failures end up as one log line. Without the location the
/// line does not say whether the request, the reply parsing or the URL building failed.
#[test]
#[track_caller]
fn given_server_error_when_formatted_then_includes_status_message_and_location() {
    // GIVEN: A server error
    let err = StorefrontClientError::Server {
        status: HttpStatusCode(401),
        message: "Kullanıcı adı veya şifre hatalı".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let error_string = err.to_string();

    // THEN: Kind, status, message and file are all there
    assert!(error_string.contains("Server Error"));
    assert!(error_string.contains("HTTP 401"));
    assert!(error_string.contains("hatalı"));
    assert!(error_string.contains("error.rs"));
}

#[test]
fn given_url_parse_failure_when_converted_then_becomes_url_parse_variant() {
    let parse_error = url::Url::parse("no scheme").unwrap_err();

    let err = StorefrontClientError::from(parse_error);

    assert!(matches!(err, StorefrontClientError::UrlParse { .. }));
}

#[test]
fn given_submit_error_when_wrapped_in_core_error_then_display_is_transparent() {
    // GIVEN: A missing credential error
    let submit = SubmitError::MissingCredential {
        message: "no credential stored under 'token'".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Wrapping
    let core = CoreError::from(submit);

    // THEN: Same message
    assert!(core.to_string().starts_with("Missing Credential Error"));
    assert!(core.to_string().contains("'token'"));
}
