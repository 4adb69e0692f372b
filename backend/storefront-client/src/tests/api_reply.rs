use crate::ApiReply;
use crate::error::StorefrontClientError;

use common::HttpStatusCode;

use serde_json::json;

#[test]
fn given_reply_with_message_when_required_then_returns_it() {
    let reply = ApiReply {
        status: HttpStatusCode(200),
        body: json!({"message": "Şifreniz başarıyla güncellendi."}),
    };

    assert_eq!(
        reply.require_message().unwrap(),
        "Şifreniz başarıyla güncellendi."
    );
}

/// **VALUE**: A malformed reply error points at the code that required the message.
///
/// **BUG THIS CATCHES**: Would catch the location being captured inside a closure, which
/// makes every malformed reply report the same line in the client module.
#[test]
fn given_reply_without_message_when_required_then_error_points_at_caller() {
    // GIVEN: A reply whose message is not a string
    let reply = ApiReply {
        status: HttpStatusCode(200),
        body: json!({"message": 42}),
    };

    // WHEN: Requiring the message
    let expected_line = line!() + 1;
    let result = reply.require_message();

    // THEN: MalformedReply located at this call site
    match result {
        Err(StorefrontClientError::MalformedReply { message, location }) => {
            assert!(message.contains("HTTP 200"));
            assert!(location.file.ends_with("api_reply.rs"), "got {}", location.file);
            assert_eq!(location.line, expected_line);
        }
        other => panic!("expected MalformedReply, got {other:?}"),
    }
}
