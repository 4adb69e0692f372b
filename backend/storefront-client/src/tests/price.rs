// Unit tests for lenient price parsing
// The product form sends whatever prefix of the input reads as a number

use crate::product::parse_price;

#[test]
fn given_plain_decimal_when_parsed_then_returns_value() {
    assert_eq!(parse_price("19.99"), 19.99);
    assert_eq!(parse_price("42"), 42.0);
    assert_eq!(parse_price(".5"), 0.5);
    assert_eq!(parse_price("5."), 5.0);
}

/// **VALUE**: Users type currency suffixes and stray spaces into the price box.
///
/// **BUG THIS CATCHES**: Would catch a strict `str::parse` rejecting `" 12.5 TL"` and
/// sending `null` for a price the user clearly entered.
#[test]
fn given_price_with_whitespace_and_suffix_when_parsed_then_takes_numeric_prefix() {
    // GIVEN: Inputs with leading whitespace and trailing text
    // WHEN / THEN: The numeric prefix is used
    assert_eq!(parse_price("  12.5 TL"), 12.5);
    assert_eq!(parse_price("2.75.15"), 2.75);
    assert_eq!(parse_price("7abc"), 7.0);
}

#[test]
fn given_signed_and_exponent_forms_when_parsed_then_handles_them() {
    assert_eq!(parse_price("-3"), -3.0);
    assert_eq!(parse_price("+4.5"), 4.5);
    assert_eq!(parse_price("1e3"), 1000.0);
    assert_eq!(parse_price("2.5E-1"), 0.25);
    // Dangling exponent is not part of the number
    assert_eq!(parse_price("8e"), 8.0);
    assert_eq!(parse_price("8e+"), 8.0);
}

#[test]
fn given_infinity_when_parsed_then_returns_infinite() {
    assert_eq!(parse_price("Infinity"), f64::INFINITY);
    assert_eq!(parse_price("-Infinity"), f64::NEG_INFINITY);
}

#[test]
fn given_no_numeric_prefix_when_parsed_then_returns_nan() {
    assert!(parse_price("").is_nan());
    assert!(parse_price("abc").is_nan());
    assert!(parse_price(".").is_nan());
    assert!(parse_price("-").is_nan());
    assert!(parse_price("TL 12").is_nan());
}
