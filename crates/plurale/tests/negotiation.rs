//! Integration tests for locale canonicalization and negotiation.

use std::sync::Arc;

use plurale::{
    ErrorKind, FnRuleSet, LocaleData, LocaleMatcher, Locales, PluralRules, PluralRulesError,
    PluralRulesOptions, RuleTable, ServiceRegistry, canonicalize_locale_list,
};

fn resolved_locale(locales: impl Into<Locales>, matcher: LocaleMatcher) -> String {
    let options = PluralRulesOptions::builder().locale_matcher(matcher).build();
    PluralRules::new(locales, options)
        .unwrap()
        .resolved_options()
        .unwrap()
        .locale
}

// =========================================================================
// Canonicalization
// =========================================================================

#[test]
fn canonicalization_normalizes_case() {
    let tags = canonicalize_locale_list(&Locales::from("EN-us")).unwrap();
    assert_eq!(tags, vec!["en-US"]);
}

#[test]
fn canonicalization_removes_duplicates_in_order() {
    let tags = canonicalize_locale_list(&Locales::from(["fr", "en-US", "FR", "en-us"])).unwrap();
    assert_eq!(tags, vec!["fr", "en-US"]);
}

#[test]
fn canonicalization_of_default_is_empty() {
    assert!(canonicalize_locale_list(&Locales::Default).unwrap().is_empty());
}

#[test]
fn canonicalization_rejects_malformed_tags() {
    let err = canonicalize_locale_list(&Locales::from(["en", "en-"])).unwrap_err();
    assert!(matches!(err, PluralRulesError::InvalidLocaleTag { ref tag } if tag == "en-"));
    assert_eq!(err.kind(), ErrorKind::Range);
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn region_falls_back_to_language() {
    assert_eq!(resolved_locale("en-US", LocaleMatcher::Lookup), "en");
    assert_eq!(resolved_locale("de-CH", LocaleMatcher::BestFit), "de");
}

#[test]
fn unicode_extensions_are_ignored_for_resolution() {
    assert_eq!(resolved_locale("de-CH-u-nu-latn", LocaleMatcher::Lookup), "de");
}

#[test]
fn first_supported_requested_locale_wins() {
    assert_eq!(
        resolved_locale(["tlh", "fr-CA", "ru"], LocaleMatcher::Lookup),
        "fr"
    );
}

#[test]
fn unsupported_locales_resolve_to_default() {
    assert_eq!(resolved_locale("tlh", LocaleMatcher::Lookup), "en");
    assert_eq!(resolved_locale("tlh", LocaleMatcher::BestFit), "en");
}

#[test]
fn best_fit_prefers_language_match_over_default() {
    let table = RuleTable::new()
        .with("en", FnRuleSet::builder().build())
        .with("pt-PT", FnRuleSet::builder().build());
    let data = Arc::new(LocaleData::new(table));

    let lookup = PluralRules::with_data(
        Arc::clone(&data),
        "pt-BR",
        PluralRulesOptions::builder()
            .locale_matcher(LocaleMatcher::Lookup)
            .build(),
    )
    .unwrap();
    let best_fit =
        PluralRules::with_data(data, "pt-BR", PluralRulesOptions::default()).unwrap();

    assert_eq!(lookup.resolved_options().unwrap().locale, "en");
    assert_eq!(best_fit.resolved_options().unwrap().locale, "pt-PT");
}

#[test]
fn custom_default_locale_is_used() {
    let data = LocaleData::cldr().with_default_locale("fr");
    let rules =
        PluralRules::with_data(Arc::new(data), "tlh", PluralRulesOptions::default()).unwrap();
    assert_eq!(rules.resolved_options().unwrap().locale, "fr");
}

// =========================================================================
// Supported Locales
// =========================================================================

#[test]
fn supported_locales_drops_unsupported_tags() {
    let supported =
        PluralRules::supported_locales_of(["xx-YY", "en"], LocaleMatcher::BestFit).unwrap();
    assert_eq!(supported, vec!["en"]);
}

#[test]
fn supported_locales_returns_requested_tags() {
    let supported =
        PluralRules::supported_locales_of(["en-GB", "ru-RU"], LocaleMatcher::Lookup).unwrap();
    assert_eq!(supported, vec!["en-GB", "ru-RU"]);
}

#[test]
fn supported_locales_may_be_empty() {
    let supported = PluralRules::supported_locales_of("tlh", LocaleMatcher::Lookup).unwrap();
    assert!(supported.is_empty());
}

#[test]
fn supported_locales_propagates_tag_errors() {
    let err = PluralRules::supported_locales_of("not a tag", LocaleMatcher::Lookup).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

// =========================================================================
// Service Registry
// =========================================================================

#[test]
fn unbound_service_is_a_type_error() {
    let registry = ServiceRegistry::new();
    let err = registry
        .supported_locales_of("PluralRules", "en", LocaleMatcher::Lookup)
        .unwrap_err();
    assert_eq!(
        err,
        PluralRulesError::UnboundService {
            name: "PluralRules".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn registration_is_idempotent() {
    let mut registry = ServiceRegistry::new();
    let first = registry.register_plural_rules();
    let second = registry.register_plural_rules();
    assert!(Arc::ptr_eq(&first, &second));

    let replaced = registry.register(
        "PluralRules",
        LocaleData::new(RuleTable::new()),
    );
    assert!(Arc::ptr_eq(&first, &replaced));
}

#[test]
fn registry_answers_for_registered_service() {
    let mut registry = ServiceRegistry::new();
    registry.register_plural_rules();
    assert!(registry.contains("PluralRules"));
    let supported = registry
        .supported_locales_of("PluralRules", ["ja", "tlh"], LocaleMatcher::Lookup)
        .unwrap();
    assert_eq!(supported, vec!["ja"]);
}
