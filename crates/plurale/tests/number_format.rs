//! Integration tests for number rendering and value coercion.

use plurale::{DigitOptions, SignificantDigits, Value, format_number, format_number_to_string};

fn fixed(minimum_fraction: u32, maximum_fraction: u32) -> DigitOptions {
    DigitOptions {
        minimum_fraction_digits: minimum_fraction,
        maximum_fraction_digits: Some(maximum_fraction),
        ..DigitOptions::default()
    }
}

fn precision(minimum: u32, maximum: u32) -> DigitOptions {
    DigitOptions {
        significant: Some(SignificantDigits { minimum, maximum }),
        ..DigitOptions::default()
    }
}

// =========================================================================
// Fixed Fraction Digits
// =========================================================================

#[test]
fn trailing_zeros_are_trimmed_to_minimum() {
    assert_eq!(format_number_to_string(&fixed(0, 3), 1.5), "1.5");
    assert_eq!(format_number_to_string(&fixed(0, 3), 2.0), "2");
    assert_eq!(format_number_to_string(&fixed(2, 3), 2.0), "2.00");
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(format_number_to_string(&fixed(0, 0), 0.5), "1");
    assert_eq!(format_number_to_string(&fixed(0, 0), -0.5), "-1");
    assert_eq!(format_number_to_string(&fixed(0, 1), 0.25), "0.3");
}

#[test]
fn rounding_can_add_an_integer_digit() {
    assert_eq!(format_number_to_string(&fixed(0, 2), 9.999), "10");
}

#[test]
fn negative_zero_renders_as_zero() {
    assert_eq!(format_number_to_string(&fixed(0, 3), -0.0), "0");
}

#[test]
fn non_finite_values_render_as_names() {
    let options = DigitOptions::default();
    assert_eq!(format_number_to_string(&options, f64::NAN), "NaN");
    assert_eq!(format_number_to_string(&options, f64::INFINITY), "Infinity");
    assert_eq!(format_number_to_string(&options, f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn rendered_decimal_keeps_visible_fraction_digits() {
    let decimal = format_number(&fixed(2, 3), 1.5).unwrap();
    assert_eq!(decimal.to_string(), "1.50");
    assert_eq!(decimal.magnitude_range(), -2..=0);
}

#[test]
fn rendered_decimal_is_absent_for_non_finite_values() {
    let options = DigitOptions::default();
    assert!(format_number(&options, f64::NAN).is_none());
    assert!(format_number(&options, f64::INFINITY).is_none());
}

// =========================================================================
// Significant Digits
// =========================================================================

#[test]
fn significant_digits_round_and_pad() {
    assert_eq!(format_number_to_string(&precision(1, 2), 1234.0), "1200");
    assert_eq!(format_number_to_string(&precision(3, 3), 1.0), "1.00");
    assert_eq!(format_number_to_string(&precision(1, 3), 0.012_34), "0.0123");
    assert_eq!(format_number_to_string(&precision(1, 3), 999.5), "1000");
}

#[test]
fn significant_digits_override_fraction_digits() {
    let options = DigitOptions {
        significant: Some(SignificantDigits {
            minimum: 1,
            maximum: 1,
        }),
        ..fixed(3, 3)
    };
    assert_eq!(format_number_to_string(&options, 1.4), "1");
}

// =========================================================================
// Value Coercion
// =========================================================================

#[test]
fn strings_coerce_like_numeric_literals() {
    assert_eq!(Value::from("").to_number(), 0.0);
    assert_eq!(Value::from("0x1F").to_number(), 31.0);
    assert_eq!(Value::from("0b101").to_number(), 5.0);
    assert_eq!(Value::from("1e3").to_number(), 1000.0);
    assert_eq!(Value::from("-Infinity").to_number(), f64::NEG_INFINITY);
    assert!(Value::from("inf").to_number().is_nan());
    assert!(Value::from("nan").to_number().is_nan());
    assert!(Value::from("12px").to_number().is_nan());
}

#[test]
fn non_numeric_values_coerce() {
    assert!(Value::Undefined.to_number().is_nan());
    assert_eq!(Value::Null.to_number(), 0.0);
    assert_eq!(Value::from(false).to_number(), 0.0);
    assert_eq!(Value::from(vec![Value::from("7")]).to_number(), 7.0);
    assert!(Value::from(vec![Value::from(1), Value::from(2)]).to_number().is_nan());
    assert_eq!(Value::from(None::<i32>), Value::Undefined);
}

#[test]
fn json_numbers_become_values() {
    let integer: Value = serde_json::from_str("5").unwrap();
    let float: Value = serde_json::from_str("1.5").unwrap();
    let null: Value = serde_json::from_str("null").unwrap();
    assert_eq!(integer, Value::Integer(5));
    assert_eq!(float, Value::Float(1.5));
    assert_eq!(null, Value::Null);
}
