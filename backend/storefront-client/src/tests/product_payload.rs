use crate::product::{ProductForm, ProductPayload};

use serde_json::json;

/// **VALUE**: Pins the `/add-product` wire field names.
///
/// **WHY THIS MATTERS**: The backend reads `product_name`, `product_price` and
/// `product_description`. A rename here silently breaks product creation.
#[test]
fn given_product_form_when_serialized_then_uses_wire_field_names() {
    // GIVEN: A filled product form
    let form = ProductForm::new("Lamp", "24.90", "Desk lamp");

    // WHEN: Converting and serializing
    let payload = ProductPayload::from(&form);
    let value = serde_json::to_value(&payload).unwrap();

    // THEN: Matches the expected JSON document
    assert_eq!(
        value,
        json!({
            "product_name": "Lamp",
            "product_price": 24.90,
            "product_description": "Desk lamp"
        })
    );
}

#[test]
fn given_unparsable_price_when_serialized_then_price_is_null() {
    // GIVEN: A price the user left as text
    let form = ProductForm::new("Lamp", "cheap", "");

    // WHEN: Serializing
    let value = serde_json::to_value(ProductPayload::from(&form)).unwrap();

    // THEN: The price goes out as null, the rest untouched
    assert!(value["product_price"].is_null());
    assert_eq!(value["product_name"], "Lamp");
    assert_eq!(value["product_description"], "");
}
