use crate::error::AppError;

use storefront_client::error::{ConfigError, SubmitError};

use common::ErrorLocation;

use std::panic::Location;

#[test]
fn given_app_error_when_formatted_then_includes_message_and_location() {
    let err = AppError::app("password not reset");

    let formatted = err.to_string();

    assert!(formatted.starts_with("App Error: password not reset"));
    assert!(formatted.contains("error.rs"));
}

/// **VALUE**: Library errors keep their full message when they reach the host.
///
/// **BUG THIS CATCHES**: Would catch a conversion that drops the inner message, leaving
/// the user with a bare "Core Error" and an exit code.
#[test]
fn given_submit_error_when_converted_then_core_variant_keeps_message() {
    // GIVEN: A missing-credential error from the product form
    let submit = SubmitError::MissingCredential {
        message: "no credential stored under 'token'".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Converting
    let err = AppError::from(submit);

    // THEN: Core variant with the original text
    match err {
        AppError::Core { message, .. } => {
            assert!(message.contains("Missing Credential Error"));
            assert!(message.contains("'token'"));
        }
        other => panic!("expected Core, got {other:?}"),
    }
}

#[test]
fn given_config_error_when_converted_then_becomes_core_variant() {
    let config = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "storage.token_key cannot be empty".to_string(),
    };

    let err = AppError::from(config);

    assert!(matches!(err, AppError::Core { .. }));
    assert!(err.to_string().contains("token_key"));
}
