use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_checked_then_only_those_are_success() {
    // GIVEN / WHEN / THEN
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(201).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(400).is_success());
}

/// **VALUE**: The reset backend answers an expired link with 400 and a crash with 500.
/// Both must be recognized as failures of different kinds.
#[test]
fn given_reset_failure_codes_when_classified_then_client_and_server_errors_differ() {
    // GIVEN: Expired link and internal error statuses
    let expired = HttpStatusCode::from(400);
    let crashed = HttpStatusCode::from(500);

    // THEN: Each falls in exactly one bucket
    assert!(expired.is_client_error());
    assert!(!expired.is_server_error());
    assert!(crashed.is_server_error());
    assert!(!crashed.is_client_error());
}

#[test]
fn given_status_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode(403).to_string(), "403");
}
