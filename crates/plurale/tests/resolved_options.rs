//! Integration tests for resolved options snapshots.

use plurale::{PluralRules, PluralRulesOptions, PluralType};
use serde_json::json;

fn resolve(options: PluralRulesOptions) -> plurale::ResolvedOptions {
    PluralRules::new("en", options)
        .unwrap()
        .resolved_options()
        .unwrap()
}

#[test]
fn default_keys_in_canonical_order() {
    let resolved = resolve(PluralRulesOptions::default());
    insta::assert_debug_snapshot!(resolved.keys(), @r#"
    [
        "locale",
        "type",
        "minimumIntegerDigits",
        "minimumFractionDigits",
        "maximumFractionDigits",
    ]
    "#);
}

#[test]
fn significant_digit_keys_appear_only_when_requested() {
    let resolved = resolve(
        PluralRulesOptions::builder()
            .minimum_significant_digits(2)
            .build(),
    );
    assert_eq!(
        resolved.keys(),
        vec![
            "locale",
            "type",
            "minimumIntegerDigits",
            "minimumFractionDigits",
            "maximumFractionDigits",
            "minimumSignificantDigits",
            "maximumSignificantDigits",
        ]
    );
    assert_eq!(resolved.minimum_significant_digits, Some(2));
    assert_eq!(resolved.maximum_significant_digits, Some(21));
}

#[test]
fn default_values() {
    let resolved = resolve(PluralRulesOptions::default());
    assert_eq!(resolved.locale, "en");
    assert_eq!(resolved.plural_type, PluralType::Cardinal);
    assert_eq!(resolved.minimum_integer_digits, 1);
    assert_eq!(resolved.minimum_fraction_digits, 0);
    assert_eq!(resolved.maximum_fraction_digits, Some(3));
    assert_eq!(resolved.minimum_significant_digits, None);
}

#[test]
fn maximum_fraction_digits_follows_larger_minimum() {
    let resolved = resolve(
        PluralRulesOptions::builder()
            .minimum_fraction_digits(5)
            .build(),
    );
    assert_eq!(resolved.minimum_fraction_digits, 5);
    assert_eq!(resolved.maximum_fraction_digits, Some(5));
}

#[test]
fn explicit_maximum_fraction_digits_is_kept() {
    let resolved = resolve(
        PluralRulesOptions::builder()
            .maximum_fraction_digits(1)
            .build(),
    );
    assert_eq!(resolved.maximum_fraction_digits, Some(1));
}

#[test]
fn serializes_with_option_names() {
    let resolved = resolve(
        PluralRulesOptions::builder()
            .plural_type(PluralType::Ordinal)
            .build(),
    );
    assert_eq!(
        serde_json::to_value(&resolved).unwrap(),
        json!({
            "locale": "en",
            "type": "ordinal",
            "minimumIntegerDigits": 1,
            "minimumFractionDigits": 0,
            "maximumFractionDigits": 3,
        })
    );
}

#[test]
fn snapshot_is_independent_of_instance() {
    let rules = PluralRules::new("ru", PluralRulesOptions::default()).unwrap();
    let mut first = rules.resolved_options().unwrap();
    first.locale = "changed".to_string();
    assert_eq!(rules.resolved_options().unwrap().locale, "ru");
}
