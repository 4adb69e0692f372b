use crate::page::{PageLocation, SubmitEvent};

#[test]
fn given_query_string_when_param_requested_then_returns_decoded_value() {
    let location =
        PageLocation::parse("http://shop.local/reset-password?token=a%2Bb%20c&x=1").unwrap();

    assert_eq!(location.query_param("token").as_deref(), Some("a+b c"));
    assert_eq!(location.query_param("x").as_deref(), Some("1"));
    assert_eq!(location.query_param("missing"), None);
}

#[test]
fn given_repeated_param_when_requested_then_first_value_wins() {
    let location = PageLocation::parse("http://shop.local/?token=first&token=second").unwrap();

    assert_eq!(location.query_param("token").as_deref(), Some("first"));
}

#[test]
fn given_site_path_when_resolved_then_keeps_origin_and_drops_query() {
    let location = PageLocation::parse("http://shop.local:5000/reset-password?token=abc").unwrap();

    let target = location.resolve("/login").unwrap();

    assert_eq!(target.as_str(), "http://shop.local:5000/login");
}

#[test]
fn given_relative_garbage_when_parsed_then_returns_url_parse_error() {
    let result = PageLocation::parse("reset-password?token=abc");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("URL Parse Error"));
}

#[test]
fn given_new_event_when_default_prevented_then_flag_is_set() {
    let mut event = SubmitEvent::new();
    assert!(!event.default_prevented());

    event.prevent_default();

    assert!(event.default_prevented());
}
