use crate::RedactedToken;

/// **VALUE**: Verifies that a stored credential never leaks through `{:?}` or `{}`.
///
/// **WHY THIS MATTERS**: Handlers log the outcome of every submission. The authorization
/// token attached to `/add-product` must not end up in the log file.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A token with a recognizable value
    let token = RedactedToken::new("eyJhbGciOiJIUzI1NiJ9.secret");

    // WHEN: Formatting it both ways
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither output contains the secret
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_when_serialized_then_fails() {
    // GIVEN: A token
    let token = RedactedToken::new("abc123");

    // WHEN: Serializing with serde_json
    let result = serde_json::to_string(&token);

    // THEN: Serialization is refused
    assert!(result.is_err(), "RedactedToken must not serialize");
}

#[test]
fn given_token_when_read_explicitly_then_exposes_value_and_length() {
    let token = RedactedToken::new("abc123");

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
    assert!(RedactedToken::new("").is_empty());
}
