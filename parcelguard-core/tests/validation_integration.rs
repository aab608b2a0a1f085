//! Integration tests for input validation
//!
//! Covers both failure kinds on every field, the boolean rule, text
//! coercion, and the order in which checks run.

mod common;

use parcelguard_core::{
    classify, classify_raw, Category, ErrorKind, Field, Package, RawMeasurement, SortError,
};

use common::INVALID_TYPED;

#[test]
fn test_invalid_typed_inputs() {
    for &((w, h, l, m), kind) in INVALID_TYPED {
        let err = classify(w, h, l, m).unwrap_err();
        assert_eq!(err.kind(), kind, "input ({w}, {h}, {l}, {m})");
    }
}

#[test]
fn test_non_numeric_each_field() {
    let cases = [
        (classify_raw("a", 10, 10, 1), Field::Width),
        (classify_raw(10, "a", 10, 1), Field::Height),
        (classify_raw(10, 10, "a", 1), Field::Length),
        (classify_raw(10, 10, 10, "a"), Field::Mass),
    ];

    for (result, field) in cases {
        assert_eq!(result, Err(SortError::InvalidType { field, found: "text" }));
    }
}

#[test]
fn test_booleans_rejected() {
    assert_eq!(classify_raw(true, 10, 10, 1).unwrap_err().kind(), ErrorKind::InvalidType);
    assert_eq!(classify_raw(10, 10, 10, false).unwrap_err().kind(), ErrorKind::InvalidType);
}

#[test]
fn test_null_and_unsupported_rejected() {
    let err = classify_raw(RawMeasurement::Null, 10, 10, 1).unwrap_err();
    assert_eq!(err, SortError::InvalidType { field: Field::Width, found: "null" });

    let err = classify_raw(10, 10, None::<f64>, 1).unwrap_err();
    assert_eq!(err.field(), Field::Length);

    let err = classify_raw(10, RawMeasurement::Unsupported("array"), 10, 1).unwrap_err();
    assert_eq!(err, SortError::InvalidType { field: Field::Height, found: "array" });
}

#[test]
fn test_numeric_text_is_coerced() {
    assert_eq!(classify_raw("100", "100", "100", "1"), Ok(Category::Special));
    assert_eq!(classify_raw(" 10 ", "10", "10", "19.9999"), Ok(Category::Standard));
}

#[test]
fn test_text_nan_and_infinity_are_value_errors() {
    assert_eq!(classify_raw(10, 10, 10, "NaN").unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(classify_raw("inf", 10, 10, 1).unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(classify_raw("-5", 10, 10, 1).unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_negative_integers_are_value_errors() {
    let err = classify_raw(-1, 10, 10, 1).unwrap_err();
    assert_eq!(err, SortError::InvalidValue { field: Field::Width, value: -1.0 });

    let err = classify_raw(10, 10, 10, 0).unwrap_err();
    assert_eq!(err, SortError::InvalidValue { field: Field::Mass, value: 0.0 });
}

#[test]
fn test_type_checks_run_before_value_checks() {
    // Width is out of range, mass is not a number: the type error wins
    let err = classify_raw(0, 10, 10, true).unwrap_err();
    assert_eq!(err, SortError::InvalidType { field: Field::Mass, found: "boolean" });
}

#[test]
fn test_first_value_error_in_argument_order() {
    let err = Package::new(10.0, 0.0, -3.0, f64::NAN).unwrap_err();
    assert_eq!(err.field(), Field::Height);
}

#[test]
fn test_error_messages() {
    let err = classify_raw(10, 10, 10, "heavy").unwrap_err();
    assert_eq!(err.to_string(), "mass must be a number, got text");

    let err = classify(-2.5, 10.0, 10.0, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "width must be a finite number greater than zero, got -2.5"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let err = classify(0.0, 1.0, 1.0, 1.0).unwrap_err();
    assert_error(&err);
}
