use datamorph_core::{DateOrder, DateShape, Shape, Token};

#[test]
fn serializes_shape_with_family_tag() {
    let shape = Shape::Date(DateShape {
        separator: '/',
        order: DateOrder::Mdy,
        zero_padded: true,
        year_digits: 4,
    });

    let json = serde_json::to_string_pretty(&shape).expect("serialize shape");
    let expected = r#"{
  "family": "date",
  "separator": "/",
  "order": "MDY",
  "zero_padded": true,
  "year_digits": 4
}"#;
    assert_eq!(json, expected);

    let back: Shape = serde_json::from_str(&json).expect("deserialize shape");
    assert_eq!(back, shape);
}

#[test]
fn serializes_tokens_and_unmatched() {
    let json = serde_json::to_string(&vec![Token::Digit, Token::Literal('-')]).expect("serialize");
    assert_eq!(json, r#"[{"kind":"digit"},{"kind":"literal","char":"-"}]"#);

    let json = serde_json::to_string(&Shape::Unmatched).expect("serialize");
    assert_eq!(json, r#"{"family":"unmatched"}"#);
}
