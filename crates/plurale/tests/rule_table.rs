//! Integration tests for custom rule tables and locale fallback.

use std::sync::Arc;

use plurale::{
    Decimal, FnRuleSet, LocaleData, PluralCategory, PluralRules, PluralRulesError,
    PluralRulesOptions, PluralType, RuleSet, RuleTable, category_name,
};

fn english_like(n: &str) -> PluralCategory {
    if n == "1" {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn english_table() -> RuleTable {
    RuleTable::new().with(
        "en",
        FnRuleSet::builder()
            .cardinal(english_like)
            .cardinal_categories(vec![PluralCategory::One, PluralCategory::Other])
            .build(),
    )
}

fn decimal(number: &str) -> Decimal {
    Decimal::try_from_str(number).unwrap()
}

fn rules(data: LocaleData, locale: &str, options: PluralRulesOptions) -> PluralRules {
    PluralRules::with_data(Arc::new(data), locale, options).unwrap()
}

// =========================================================================
// Custom Tables
// =========================================================================

#[test]
fn custom_rules_receive_formatted_numbers() {
    let plain = rules(
        LocaleData::new(english_table()),
        "en",
        PluralRulesOptions::default(),
    );
    let padded = rules(
        LocaleData::new(english_table()),
        "en",
        PluralRulesOptions::builder()
            .minimum_fraction_digits(1)
            .build(),
    );

    assert_eq!(plain.select(1).unwrap(), PluralCategory::One);
    assert_eq!(padded.select(1).unwrap(), PluralCategory::Other);
}

#[test]
fn ordinal_without_selector_is_other() {
    let ordinal = rules(
        LocaleData::new(english_table()),
        "en",
        PluralRulesOptions::builder()
            .plural_type(PluralType::Ordinal)
            .build(),
    );
    assert_eq!(ordinal.select(1).unwrap(), PluralCategory::Other);
    assert_eq!(ordinal.categories().unwrap(), vec![PluralCategory::Other]);
}

#[test]
fn replacing_an_entry_keeps_one_key() {
    let mut table = english_table();
    table.insert("en", FnRuleSet::builder().build());
    assert_eq!(table.len(), 1);
    assert_eq!(
        table
            .get("en")
            .unwrap()
            .select(PluralType::Cardinal, &decimal("1")),
        PluralCategory::Other
    );
}

// =========================================================================
// Fallback
// =========================================================================

#[test]
fn regional_locale_uses_language_rules() {
    let data = LocaleData::new(english_table())
        .with_available_locales(["en-US"])
        .unwrap();
    let regional = rules(data, "en-US", PluralRulesOptions::default());

    assert_eq!(regional.resolved_options().unwrap().locale, "en-US");
    assert_eq!(regional.select(1).unwrap(), PluralCategory::One);
    assert_eq!(regional.select(2).unwrap(), PluralCategory::Other);
}

#[test]
fn fallback_matches_base_language_for_every_number() {
    let base = rules(
        LocaleData::new(english_table()),
        "en",
        PluralRulesOptions::default(),
    );
    let regional = rules(
        LocaleData::new(english_table())
            .with_available_locales(["en-US"])
            .unwrap(),
        "en-US",
        PluralRulesOptions::default(),
    );
    for n in [0.0, 0.5, 1.0, 1.5, 2.0, 10.0, 101.0] {
        assert_eq!(base.select(n).unwrap(), regional.select(n).unwrap());
    }
}

#[test]
fn widened_locales_are_canonicalized() {
    let data = LocaleData::new(english_table())
        .with_available_locales(["EN-us", "en-US"])
        .unwrap();
    assert_eq!(data.available_locales(), ["en", "en-US"]);

    let regional = rules(data, "en-us", PluralRulesOptions::default());
    assert_eq!(regional.resolved_options().unwrap().locale, "en-US");
    assert_eq!(regional.select(1).unwrap(), PluralCategory::One);
}

#[test]
fn malformed_widened_locale_is_rejected() {
    let err = LocaleData::new(english_table())
        .with_available_locales(["not a tag"])
        .unwrap_err();
    assert_eq!(
        err,
        PluralRulesError::InvalidLocaleTag {
            tag: "not a tag".to_string()
        }
    );
}

#[test]
fn locale_without_rules_selects_other() {
    let data = LocaleData::new(english_table())
        .with_available_locales(["tlh"])
        .unwrap();
    let klingon = rules(data, "tlh", PluralRulesOptions::default());

    assert_eq!(klingon.resolved_options().unwrap().locale, "tlh");
    for n in [0, 1, 2, 3, 11, 100] {
        assert_eq!(klingon.select(n).unwrap(), PluralCategory::Other);
    }
    assert_eq!(klingon.categories().unwrap(), vec![PluralCategory::Other]);
}

#[test]
fn default_locale_without_rules_selects_other() {
    let data = LocaleData::new(RuleTable::new());
    let empty = rules(data, "en", PluralRulesOptions::default());
    assert_eq!(empty.resolved_options().unwrap().locale, "en");
    assert_eq!(empty.select(1).unwrap(), PluralCategory::Other);
}

// =========================================================================
// CLDR Table
// =========================================================================

#[test]
fn cldr_table_knows_regional_portuguese() {
    let table = RuleTable::cldr();
    assert!(table.contains("pt"));
    assert!(table.contains("pt-PT"));
    assert!(!table.contains("pt-BR"));
}

#[test]
fn cldr_categories_for_english() {
    let table = RuleTable::cldr();
    let english = table.get("en").unwrap();

    let cardinal = english.categories(PluralType::Cardinal);
    assert!(cardinal.contains(&PluralCategory::One));
    assert!(cardinal.contains(&PluralCategory::Other));
    assert!(!cardinal.contains(&PluralCategory::Few));

    let ordinal = english.categories(PluralType::Ordinal);
    for category in [
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Other,
    ] {
        assert!(ordinal.contains(&category), "missing {}", category_name(category));
    }
}

#[test]
fn cldr_rules_see_visible_fraction_digits() {
    let table = RuleTable::cldr();
    let english = table.get("en").unwrap();
    assert_eq!(
        english.select(PluralType::Cardinal, &decimal("1")),
        PluralCategory::One
    );
    assert_eq!(
        english.select(PluralType::Cardinal, &decimal("1.0")),
        PluralCategory::Other
    );
    assert_eq!(
        english.select(PluralType::Cardinal, &decimal("-1")),
        PluralCategory::One
    );
}

#[test]
fn custom_rules_see_rendered_string() {
    let table = english_table();
    let english = table.get("en").unwrap();
    assert_eq!(
        english.select(PluralType::Cardinal, &decimal("1")),
        PluralCategory::One
    );
    assert_eq!(
        english.select(PluralType::Cardinal, &decimal("1.00")),
        PluralCategory::Other
    );
}
