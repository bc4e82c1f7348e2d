use datamorph_core::{
    DateOrder, FormatRegistry, FreeTextPolicy, MatchOptions, Shape, ShapeFamily, SymbolPosition,
};

fn registry() -> FormatRegistry {
    FormatRegistry::new(&MatchOptions::default()).expect("default options are valid")
}

#[test]
fn matchers_run_in_priority_order() {
    assert_eq!(
        registry().matcher_ids(),
        vec![
            "date",
            "currency",
            "phone",
            "generic.numeric",
            "generic.alphanumeric"
        ]
    );
}

#[test]
fn classifies_each_family() {
    let registry = registry();

    let Shape::Date(date) = registry.classify("2021-03-15") else {
        panic!("expected date");
    };
    assert_eq!(date.order, DateOrder::Ymd);

    let Shape::Currency(currency) = registry.classify("$1,234.56") else {
        panic!("expected currency");
    };
    assert_eq!(currency.symbol_position, SymbolPosition::Prefix);

    let Shape::Phone(phone) = registry.classify("(555) 123-4567") else {
        panic!("expected phone");
    };
    assert_eq!(phone.groupings, vec![3, 3, 4]);

    assert_eq!(
        registry.classify("AB-1234").family(),
        Some(ShapeFamily::Generic)
    );
}

#[test]
fn dates_win_over_phone_and_generic() {
    let registry = registry();
    assert_eq!(
        registry.classify("15.03.2021").family(),
        Some(ShapeFamily::Date)
    );
    // Impossible month and day fall through to later matchers.
    assert_eq!(
        registry.classify("2021/13/45").family(),
        Some(ShapeFamily::Generic)
    );
    assert_eq!(
        registry.classify("2021-13-45").family(),
        Some(ShapeFamily::Phone)
    );
}

#[test]
fn two_digit_year_first_column_stays_in_one_shape() {
    let registry = registry();
    let shapes: Vec<Shape> = ["21-03-15", "99-12-31", "05-01-09"]
        .iter()
        .map(|raw| registry.classify(raw))
        .collect();
    for shape in &shapes {
        let Shape::Date(date) = shape else {
            panic!("expected date, got {shape:?}");
        };
        assert_eq!(date.order, DateOrder::Ymd);
        assert_eq!(date.year_digits, 2);
    }
    assert!(shapes.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn blank_values_and_free_text_are_unmatched() {
    let registry = registry();
    assert!(registry.classify("").is_unmatched());
    assert!(registry.classify("   ").is_unmatched());
    assert!(registry.classify("hello world").is_unmatched());
}

#[test]
fn mask_policy_templates_free_text() {
    let options = MatchOptions {
        free_text: FreeTextPolicy::Mask,
        ..MatchOptions::default()
    };
    let registry = FormatRegistry::new(&options).expect("valid options");
    assert_eq!(
        registry.classify("hello world").family(),
        Some(ShapeFamily::Generic)
    );
}

#[test]
fn classify_family_restricts_matchers() {
    let registry = registry();
    assert_eq!(
        registry
            .classify_family("03/15/2021", ShapeFamily::Date)
            .family(),
        Some(ShapeFamily::Date)
    );
    assert!(
        registry
            .classify_family("(555) 123-4567", ShapeFamily::Date)
            .is_unmatched()
    );
    assert_eq!(
        registry
            .classify_family("03/15/2021", ShapeFamily::Generic)
            .family(),
        Some(ShapeFamily::Generic)
    );
}

#[test]
fn custom_symbols_are_recognized() {
    let options = MatchOptions {
        currency_symbols: vec!["zł".to_string()],
        ..MatchOptions::default()
    };
    let registry = FormatRegistry::new(&options).expect("valid options");
    let Shape::Currency(shape) = registry.classify("12,50 zł") else {
        panic!("expected currency");
    };
    assert_eq!(shape.symbol, "zł");
    assert_eq!(shape.symbol_position, SymbolPosition::Suffix);
    assert_eq!(
        registry.classify("$12.50").family(),
        Some(ShapeFamily::Generic)
    );
}

#[test]
fn invalid_options_are_rejected() {
    let options = MatchOptions {
        currency_symbols: vec![String::new()],
        ..MatchOptions::default()
    };
    assert!(FormatRegistry::new(&options).is_err());
}
